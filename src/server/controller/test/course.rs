use axum::http::StatusCode;
use test_utils::{
    builder::TestBuilder,
    factory::{self, course::CourseFactory},
};

use super::{app, send};

#[tokio::test]
async fn create_returns_created_with_envelope() {
    let test = TestBuilder::new()
        .with_registrar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(
        app(db),
        "POST",
        "/api/courses",
        Some(r#"{"course_code":"MAT-101","name":"Calculus","credits":4}"#),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Course created successfully");
    assert_eq!(body["data"]["credits"], 4);
}

#[tokio::test]
async fn missing_course_is_not_found_envelope() {
    let test = TestBuilder::new()
        .with_registrar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(app(db), "DELETE", "/api/courses/404", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Course not found");
}

#[tokio::test]
async fn deleting_enrolled_course_is_bad_request() {
    let test = TestBuilder::new()
        .with_registrar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let student = factory::create_student(db).await.unwrap();
    let course = factory::create_course(db).await.unwrap();
    factory::create_enrollment(db, student.id, course.id)
        .await
        .unwrap();

    let uri = format!("/api/courses/{}", course.id);
    let (status, body) = send(app(db), "DELETE", &uri, None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "The course cannot be deleted because it has enrolled students"
    );
}

#[tokio::test]
async fn search_route_is_not_taken_for_an_id() {
    let test = TestBuilder::new()
        .with_registrar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    CourseFactory::new(db)
        .name("Organic Chemistry")
        .build()
        .await
        .unwrap();

    let (status, body) = send(app(db), "GET", "/api/courses/search?name=chem", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["name"], "Organic Chemistry");
}

use axum::http::StatusCode;
use entity::sea_orm_active_enums::EnrollmentStatus;
use test_utils::{
    builder::TestBuilder,
    factory::{self, enrollment::EnrollmentFactory},
};

use super::{app, send};

#[tokio::test]
async fn create_refreshes_student_record() {
    let test = TestBuilder::new()
        .with_registrar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let student = factory::create_student(db).await.unwrap();
    let course = factory::create_course(db).await.unwrap();

    let payload = format!(
        r#"{{"student_id":{},"course_id":{},"status":"PASSED","grade":85}}"#,
        student.id, course.id
    );
    let (status, body) = send(app(db), "POST", "/api/enrollments", Some(&payload)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Enrollment created successfully");
    assert_eq!(body["data"]["status"], "PASSED");

    let uri = format!("/api/students/{}", student.id);
    let (status, body) = send(app(db), "GET", &uri, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["gpa"], 85.0);
}

#[tokio::test]
async fn null_grade_clears_stored_grade() {
    let test = TestBuilder::new()
        .with_registrar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let student = factory::create_student(db).await.unwrap();
    let course = factory::create_course(db).await.unwrap();
    let enrollment = EnrollmentFactory::new(db, student.id, course.id)
        .status(EnrollmentStatus::Passed)
        .grade(Some(90.0))
        .build()
        .await
        .unwrap();

    let uri = format!("/api/enrollments/{}", enrollment.id);
    let (status, body) = send(app(db), "PUT", &uri, Some(r#"{"grade":null}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["grade"].is_null());
    assert_eq!(body["data"]["status"], "PASSED");
}

#[tokio::test]
async fn missing_enrollment_is_not_found_envelope() {
    let test = TestBuilder::new()
        .with_registrar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(app(db), "GET", "/api/enrollments/77", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Enrollment not found");
}

use axum::http::StatusCode;
use test_utils::{builder::TestBuilder, factory::student::StudentFactory};

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
        "/api/students",
        Some(
            r#"{"student_code":"STU-100","first_name":"Ada","last_name":"Lovelace","email":"ada@example.com"}"#,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Student created successfully");
    assert_eq!(body["data"]["student_code"], "STU-100");
    assert_eq!(body["data"]["status"], "ACTIVE");
}

#[tokio::test]
async fn malformed_create_body_is_bad_request_envelope() {
    let test = TestBuilder::new()
        .with_registrar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(app(db), "POST", "/api/students", Some("{not json")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn missing_student_is_not_found_envelope() {
    let test = TestBuilder::new()
        .with_registrar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(app(db), "GET", "/api/students/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Student not found");
}

#[tokio::test]
async fn non_numeric_id_is_bad_request_envelope() {
    let test = TestBuilder::new()
        .with_registrar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(app(db), "GET", "/api/students/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn bulk_delete_without_body_is_bad_request() {
    let test = TestBuilder::new()
        .with_registrar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(app(db), "DELETE", "/api/students", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "A non-empty array of IDs is required");
}

#[tokio::test]
async fn bulk_delete_reports_count() {
    let test = TestBuilder::new()
        .with_registrar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let first = StudentFactory::new(db).build().await.unwrap();
    let second = StudentFactory::new(db).build().await.unwrap();

    let payload = format!(r#"{{"ids":[{},{}]}}"#, first.id, second.id);
    let (status, body) = send(app(db), "DELETE", "/api/students", Some(&payload)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 2);
}

/// `/search` must win over the `/{student_id}` route.
#[tokio::test]
async fn search_route_is_not_taken_for_an_id() {
    let test = TestBuilder::new()
        .with_registrar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    StudentFactory::new(db)
        .last_name("Hopper")
        .build()
        .await
        .unwrap();
    StudentFactory::new(db)
        .last_name("Turing")
        .build()
        .await
        .unwrap();

    let (status, body) = send(app(db), "GET", "/api/students/search?last_name=hop", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["last_name"], "Hopper");
}

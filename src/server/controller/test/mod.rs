//! Route tests that drive the assembled router with `tower::ServiceExt::oneshot`.

mod course;
mod enrollment;
mod student;

use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use crate::server::{router::router, state::AppState};

/// Builds the full application router over the given database.
fn app(db: &sea_orm::DatabaseConnection) -> Router {
    router().with_state(AppState::new(db.clone()))
}

/// Sends one request and returns the status with the decoded JSON body.
async fn send(app: Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header(CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app.oneshot(request.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, serde_json::from_slice(&bytes).unwrap())
}

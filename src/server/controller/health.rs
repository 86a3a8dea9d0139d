use axum::{http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;

use crate::model::api::HealthDto;

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Check that the API is running.
#[utoipa::path(
    get,
    path = "/api/test",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "API is running", body = HealthDto)
    ),
)]
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthDto {
            success: true,
            message: "API running".to_string(),
            timestamp: Utc::now(),
        }),
    )
}

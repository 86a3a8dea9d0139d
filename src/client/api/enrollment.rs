use crate::{
    client::model::error::ApiError,
    model::enrollment::{
        CreateEnrollmentDto, EnrollmentDetailDto, EnrollmentDto, UpdateEnrollmentDto,
    },
};

use super::helper::{
    delete, get, parse_data, parse_message, post, put, send_request, serialize_json,
};

/// Get all enrollments with their students and courses
pub async fn get_enrollments() -> Result<Vec<EnrollmentDetailDto>, ApiError> {
    let response = send_request(get("/api/enrollments")).await?;
    parse_data(response).await
}

pub async fn create_enrollment(
    payload: CreateEnrollmentDto,
) -> Result<EnrollmentDetailDto, ApiError> {
    let body = serialize_json(&payload)?;

    let response = send_request(post("/api/enrollments").body(body)).await?;
    parse_data(response).await
}

pub async fn update_enrollment(
    enrollment_id: i32,
    payload: UpdateEnrollmentDto,
) -> Result<EnrollmentDto, ApiError> {
    let url = format!("/api/enrollments/{}", enrollment_id);
    let body = serialize_json(&payload)?;

    let response = send_request(put(&url).body(body)).await?;
    parse_data(response).await
}

pub async fn delete_enrollment(enrollment_id: i32) -> Result<String, ApiError> {
    let url = format!("/api/enrollments/{}", enrollment_id);

    let response = send_request(delete(&url)).await?;
    parse_message(response).await
}

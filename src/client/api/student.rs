use crate::{
    client::model::error::ApiError,
    model::student::{CreateStudentDto, StudentDetailDto, StudentDto, UpdateStudentDto},
};

use super::helper::{
    delete, get, parse_data, parse_message, post, put, send_request, serialize_json,
};

/// Get all students with their enrollments
pub async fn get_students() -> Result<Vec<StudentDetailDto>, ApiError> {
    let response = send_request(get("/api/students")).await?;
    parse_data(response).await
}

pub async fn create_student(payload: CreateStudentDto) -> Result<StudentDto, ApiError> {
    let body = serialize_json(&payload)?;

    let response = send_request(post("/api/students").body(body)).await?;
    parse_data(response).await
}

pub async fn update_student(
    student_id: i32,
    payload: UpdateStudentDto,
) -> Result<StudentDto, ApiError> {
    let url = format!("/api/students/{}", student_id);
    let body = serialize_json(&payload)?;

    let response = send_request(put(&url).body(body)).await?;
    parse_data(response).await
}

/// Delete a student along with its enrollments
pub async fn delete_student(student_id: i32) -> Result<String, ApiError> {
    let url = format!("/api/students/{}", student_id);

    let response = send_request(delete(&url)).await?;
    parse_message(response).await
}

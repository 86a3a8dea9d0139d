use crate::{
    client::model::error::ApiError,
    model::course::{CourseDetailDto, CourseDto, CreateCourseDto, UpdateCourseDto},
};

use super::helper::{
    delete, get, parse_data, parse_message, post, put, send_request, serialize_json,
};

/// Get all courses with their enrollments
pub async fn get_courses() -> Result<Vec<CourseDetailDto>, ApiError> {
    let response = send_request(get("/api/courses")).await?;
    parse_data(response).await
}

pub async fn create_course(payload: CreateCourseDto) -> Result<CourseDto, ApiError> {
    let body = serialize_json(&payload)?;

    let response = send_request(post("/api/courses").body(body)).await?;
    parse_data(response).await
}

pub async fn update_course(course_id: i32, payload: UpdateCourseDto) -> Result<CourseDto, ApiError> {
    let url = format!("/api/courses/{}", course_id);
    let body = serialize_json(&payload)?;

    let response = send_request(put(&url).body(body)).await?;
    parse_data(response).await
}

/// Delete a course. Fails while students are enrolled in it.
pub async fn delete_course(course_id: i32) -> Result<String, ApiError> {
    let url = format!("/api/courses/{}", course_id);

    let response = send_request(delete(&url)).await?;
    parse_message(response).await
}

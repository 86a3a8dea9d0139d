use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, BulkDeleteDto, ErrorDto, MessageDto},
        course::{CourseDetailDto, CourseDto, CourseSearchDto, CreateCourseDto, UpdateCourseDto},
    },
    server::{
        error::AppError,
        extractor::{ApiJson, ApiPath, ApiQuery},
        model::course::{CourseDetail, CourseSearchParams, CreateCourseParams, UpdateCourseParams},
        service::course::CourseService,
        state::AppState,
    },
};

/// Tag for grouping course endpoints in OpenAPI documentation
pub static COURSE_TAG: &str = "course";

/// Create a new course.
///
/// The level defaults to `BASIC` and new courses are active.
///
/// # Returns
/// - `201 Created` - The created course
/// - `400 Bad Request` - Invalid level, missing fields, non-positive credits or duplicate code
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/courses",
    tag = COURSE_TAG,
    request_body = CreateCourseDto,
    responses(
        (status = 201, description = "Successfully created course", body = ApiResponse<CourseDto>),
        (status = 400, description = "Invalid course data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_course(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CourseService::new(&state.db);

    let params = CreateCourseParams::from_dto(payload)?;

    let course = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::data(course.into_dto()).with_message("Course created successfully")),
    ))
}

/// Get every course with enrollments and enrolled students.
#[utoipa::path(
    get,
    path = "/api/courses",
    tag = COURSE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved courses", body = ApiResponse<Vec<CourseDetailDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_courses(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = CourseService::new(&state.db);

    let courses = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::list(
            courses.into_iter().map(CourseDetail::into_dto).collect(),
        )),
    ))
}

/// Search courses by name substring, level, inclusive credit range and active flag.
#[utoipa::path(
    get,
    path = "/api/courses/search",
    tag = COURSE_TAG,
    params(CourseSearchDto),
    responses(
        (status = 200, description = "Successfully searched courses", body = ApiResponse<Vec<CourseDetailDto>>),
        (status = 400, description = "Invalid search filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_courses(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<CourseSearchDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CourseService::new(&state.db);

    let params = CourseSearchParams::from_dto(query)?;

    let courses = service.search(params).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::list(
            courses.into_iter().map(CourseDetail::into_dto).collect(),
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/courses/{course_id}",
    tag = COURSE_TAG,
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved course", body = ApiResponse<CourseDetailDto>),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course_by_id(
    State(state): State<AppState>,
    ApiPath(course_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CourseService::new(&state.db);

    match service.get_by_id(course_id).await? {
        Some(course) => Ok((StatusCode::OK, Json(ApiResponse::data(course.into_dto())))),
        None => Err(AppError::NotFound("Course not found".to_string())),
    }
}

/// Update a course.
///
/// Absent fields are left unchanged; empty `description` or `prerequisites` clear them.
#[utoipa::path(
    put,
    path = "/api/courses/{course_id}",
    tag = COURSE_TAG,
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    request_body = UpdateCourseDto,
    responses(
        (status = 200, description = "Successfully updated course", body = ApiResponse<CourseDto>),
        (status = 400, description = "Invalid course data", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_course(
    State(state): State<AppState>,
    ApiPath(course_id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CourseService::new(&state.db);

    let params = UpdateCourseParams::from_dto(course_id, payload)?;

    match service.update(params).await? {
        Some(course) => Ok((
            StatusCode::OK,
            Json(ApiResponse::data(course.into_dto()).with_message("Course updated successfully")),
        )),
        None => Err(AppError::NotFound("Course not found".to_string())),
    }
}

/// Delete a course.
///
/// # Returns
/// - `200 OK` - Course deleted
/// - `400 Bad Request` - Students are enrolled in the course
/// - `404 Not Found` - Course not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/courses/{course_id}",
    tag = COURSE_TAG,
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted course", body = MessageDto),
        (status = 400, description = "Course has enrolled students", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_course(
    State(state): State<AppState>,
    ApiPath(course_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CourseService::new(&state.db);

    if service.delete(course_id).await? {
        Ok((StatusCode::OK, Json(MessageDto::new("Course deleted successfully"))))
    } else {
        Err(AppError::NotFound("Course not found".to_string()))
    }
}

/// Delete several courses at once. Nothing is deleted if any of them has enrollments.
#[utoipa::path(
    delete,
    path = "/api/courses",
    tag = COURSE_TAG,
    request_body = BulkDeleteDto,
    responses(
        (status = 200, description = "Successfully deleted courses", body = MessageDto),
        (status = 400, description = "No IDs given or courses have enrolled students", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_courses(
    State(state): State<AppState>,
    payload: Result<Json<BulkDeleteDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let service = CourseService::new(&state.db);

    let ids = payload.map(|Json(dto)| dto.ids).unwrap_or_default();

    let deleted = service.delete_many(&ids).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Courses deleted successfully").with_count(deleted)),
    ))
}

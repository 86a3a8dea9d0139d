use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageDto},
        enrollment::{CreateEnrollmentDto, EnrollmentDetailDto, EnrollmentDto, UpdateEnrollmentDto},
    },
    server::{
        error::AppError,
        extractor::{ApiJson, ApiPath},
        model::enrollment::{CreateEnrollmentParams, EnrollmentDetail, UpdateEnrollmentParams},
        service::enrollment::EnrollmentService,
        state::AppState,
    },
};

/// Tag for grouping enrollment endpoints in OpenAPI documentation
pub static ENROLLMENT_TAG: &str = "enrollment";

/// Enroll a student in a course.
///
/// The status defaults to `ENROLLED`, the enrollment is dated today with a first attempt
/// and the student's GPA and completed credits are recomputed.
///
/// # Returns
/// - `201 Created` - The enrollment with its student and course
/// - `400 Bad Request` - Invalid status or grade, unknown student or course, or the
///   student is already enrolled in the course
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/enrollments",
    tag = ENROLLMENT_TAG,
    request_body = CreateEnrollmentDto,
    responses(
        (status = 201, description = "Successfully created enrollment", body = ApiResponse<EnrollmentDetailDto>),
        (status = 400, description = "Invalid enrollment data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_enrollment(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateEnrollmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = EnrollmentService::new(&state.db);

    let params = CreateEnrollmentParams::from_dto(payload)?;

    let enrollment = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(
            ApiResponse::data(enrollment.into_dto())
                .with_message("Enrollment created successfully"),
        ),
    ))
}

/// Get every enrollment with its student and course.
#[utoipa::path(
    get,
    path = "/api/enrollments",
    tag = ENROLLMENT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved enrollments", body = ApiResponse<Vec<EnrollmentDetailDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_enrollments(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = EnrollmentService::new(&state.db);

    let enrollments = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::list(
            enrollments
                .into_iter()
                .map(EnrollmentDetail::into_dto)
                .collect(),
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/enrollments/{enrollment_id}",
    tag = ENROLLMENT_TAG,
    params(
        ("enrollment_id" = i32, Path, description = "Enrollment ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved enrollment", body = ApiResponse<EnrollmentDetailDto>),
        (status = 404, description = "Enrollment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_enrollment_by_id(
    State(state): State<AppState>,
    ApiPath(enrollment_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = EnrollmentService::new(&state.db);

    match service.get_by_id(enrollment_id).await? {
        Some(enrollment) => Ok((StatusCode::OK, Json(ApiResponse::data(enrollment.into_dto())))),
        None => Err(AppError::NotFound("Enrollment not found".to_string())),
    }
}

/// Update an enrollment and recompute the student's GPA and completed credits.
///
/// An empty `completed_on` clears the completion date.
#[utoipa::path(
    put,
    path = "/api/enrollments/{enrollment_id}",
    tag = ENROLLMENT_TAG,
    params(
        ("enrollment_id" = i32, Path, description = "Enrollment ID")
    ),
    request_body = UpdateEnrollmentDto,
    responses(
        (status = 200, description = "Successfully updated enrollment", body = ApiResponse<EnrollmentDto>),
        (status = 400, description = "Invalid enrollment data", body = ErrorDto),
        (status = 404, description = "Enrollment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_enrollment(
    State(state): State<AppState>,
    ApiPath(enrollment_id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateEnrollmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = EnrollmentService::new(&state.db);

    let params = UpdateEnrollmentParams::from_dto(enrollment_id, payload)?;

    match service.update(params).await? {
        Some(enrollment) => Ok((
            StatusCode::OK,
            Json(
                ApiResponse::data(enrollment.into_dto())
                    .with_message("Enrollment updated successfully"),
            ),
        )),
        None => Err(AppError::NotFound("Enrollment not found".to_string())),
    }
}

/// Delete an enrollment and recompute the student's GPA and completed credits.
#[utoipa::path(
    delete,
    path = "/api/enrollments/{enrollment_id}",
    tag = ENROLLMENT_TAG,
    params(
        ("enrollment_id" = i32, Path, description = "Enrollment ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted enrollment", body = MessageDto),
        (status = 404, description = "Enrollment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_enrollment(
    State(state): State<AppState>,
    ApiPath(enrollment_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = EnrollmentService::new(&state.db);

    if service.delete(enrollment_id).await? {
        Ok((
            StatusCode::OK,
            Json(MessageDto::new("Enrollment deleted successfully")),
        ))
    } else {
        Err(AppError::NotFound("Enrollment not found".to_string()))
    }
}

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, BulkDeleteDto, ErrorDto, MessageDto},
        student::{
            CreateStudentDto, StudentDetailDto, StudentDto, StudentSearchDto, UpdateStudentDto,
        },
    },
    server::{
        error::AppError,
        extractor::{ApiJson, ApiPath, ApiQuery},
        model::student::{
            CreateStudentParams, StudentDetail, StudentSearchParams, UpdateStudentParams,
        },
        service::student::StudentService,
        state::AppState,
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "student";

/// Create a new student.
///
/// The status defaults to `ACTIVE`, GPA and completed credits start at zero and the
/// admission date defaults to today.
///
/// # Returns
/// - `201 Created` - The created student
/// - `400 Bad Request` - Invalid status, missing fields, bad date or duplicate code/email
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/students",
    tag = STUDENT_TAG,
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Successfully created student", body = ApiResponse<StudentDto>),
        (status = 400, description = "Invalid student data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let params = CreateStudentParams::from_dto(payload)?;

    let student = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::data(student.into_dto()).with_message("Student created successfully")),
    ))
}

/// Get every student with enrollments and enrolled courses.
#[utoipa::path(
    get,
    path = "/api/students",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved students", body = ApiResponse<Vec<StudentDetailDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let students = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::list(
            students.into_iter().map(StudentDetail::into_dto).collect(),
        )),
    ))
}

/// Search students.
///
/// Names match case-insensitive substrings, the status must match exactly and the GPA
/// bounds are inclusive. Absent filters are ignored.
///
/// # Returns
/// - `200 OK` - Matching students with enrollments
/// - `400 Bad Request` - Invalid status filter
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/students/search",
    tag = STUDENT_TAG,
    params(StudentSearchDto),
    responses(
        (status = 200, description = "Successfully searched students", body = ApiResponse<Vec<StudentDetailDto>>),
        (status = 400, description = "Invalid search filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_students(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<StudentSearchDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let params = StudentSearchParams::from_dto(query)?;

    let students = service.search(params).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::list(
            students.into_iter().map(StudentDetail::into_dto).collect(),
        )),
    ))
}

/// Get a specific student with enrollments and enrolled courses.
#[utoipa::path(
    get,
    path = "/api/students/{student_id}",
    tag = STUDENT_TAG,
    params(
        ("student_id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved student", body = ApiResponse<StudentDetailDto>),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_by_id(
    State(state): State<AppState>,
    ApiPath(student_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    match service.get_by_id(student_id).await? {
        Some(student) => Ok((StatusCode::OK, Json(ApiResponse::data(student.into_dto())))),
        None => Err(AppError::NotFound("Student not found".to_string())),
    }
}

/// Update a student.
///
/// Absent fields are left unchanged and empty strings clear nullable fields. GPA and
/// completed credits may be set manually; they are recomputed on the next enrollment change.
///
/// # Returns
/// - `200 OK` - The updated student
/// - `400 Bad Request` - Invalid field values or duplicate code/email
/// - `404 Not Found` - Student not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/students/{student_id}",
    tag = STUDENT_TAG,
    params(
        ("student_id" = i32, Path, description = "Student ID")
    ),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Successfully updated student", body = ApiResponse<StudentDto>),
        (status = 400, description = "Invalid student data", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    ApiPath(student_id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let params = UpdateStudentParams::from_dto(student_id, payload)?;

    match service.update(params).await? {
        Some(student) => Ok((
            StatusCode::OK,
            Json(
                ApiResponse::data(student.into_dto()).with_message("Student updated successfully"),
            ),
        )),
        None => Err(AppError::NotFound("Student not found".to_string())),
    }
}

/// Delete a student together with its enrollments.
#[utoipa::path(
    delete,
    path = "/api/students/{student_id}",
    tag = STUDENT_TAG,
    params(
        ("student_id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted student", body = MessageDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    ApiPath(student_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    if service.delete(student_id).await? {
        Ok((
            StatusCode::OK,
            Json(MessageDto::new("Student deleted successfully")),
        ))
    } else {
        Err(AppError::NotFound("Student not found".to_string()))
    }
}

/// Delete several students at once.
///
/// A missing or malformed body is treated like an empty ID list.
///
/// # Returns
/// - `200 OK` - Number of deleted students in `count`
/// - `400 Bad Request` - No IDs given
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/students",
    tag = STUDENT_TAG,
    request_body = BulkDeleteDto,
    responses(
        (status = 200, description = "Successfully deleted students", body = MessageDto),
        (status = 400, description = "No IDs given", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_students(
    State(state): State<AppState>,
    payload: Result<Json<BulkDeleteDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let ids = payload.map(|Json(dto)| dto.ids).unwrap_or_default();

    let deleted = service.delete_many(&ids).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Students deleted successfully").with_count(deleted)),
    ))
}

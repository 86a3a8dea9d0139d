use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{course, enrollment, health, student},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Registrar API",
        description = "Manage students, courses and enrollments"
    ),
    tags(
        (name = "student", description = "Student records"),
        (name = "course", description = "Course catalogue"),
        (name = "enrollment", description = "Student enrollments in courses"),
        (name = "health", description = "Service health")
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health::health))
        .routes(routes!(
            student::get_students,
            student::create_student,
            student::delete_students
        ))
        .routes(routes!(student::search_students))
        .routes(routes!(
            student::get_student_by_id,
            student::update_student,
            student::delete_student
        ))
        .routes(routes!(
            course::get_courses,
            course::create_course,
            course::delete_courses
        ))
        .routes(routes!(course::search_courses))
        .routes(routes!(
            course::get_course_by_id,
            course::update_course,
            course::delete_course
        ))
        .routes(routes!(
            enrollment::get_enrollments,
            enrollment::create_enrollment
        ))
        .routes(routes!(
            enrollment::get_enrollment_by_id,
            enrollment::update_enrollment,
            enrollment::delete_enrollment
        ))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

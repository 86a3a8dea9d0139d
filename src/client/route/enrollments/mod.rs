mod modal;
mod table;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{ErrorAlert, LoadingIndicator, Page},
        constant::SITE_NAME,
        model::error::ApiError,
    },
    model::enrollment::EnrollmentDetailDto,
};

use modal::EnrollmentFormModal;
use table::EnrollmentsTable;

#[cfg(feature = "web")]
use crate::client::api::{
    course::get_courses, enrollment::get_enrollments, student::get_students,
};

/// Student or course as offered in the enrollment form dropdowns
#[derive(Clone, PartialEq)]
pub struct SelectOption {
    pub id: i32,
    pub label: String,
}

/// Enrollments together with the dropdown choices for the form
#[derive(Clone, PartialEq, Default)]
struct EnrollmentsData {
    enrollments: Vec<EnrollmentDetailDto>,
    students: Vec<SelectOption>,
    courses: Vec<SelectOption>,
}

#[cfg(feature = "web")]
async fn fetch_enrollments_data() -> Result<EnrollmentsData, ApiError> {
    let enrollments = get_enrollments().await?;
    let students = get_students()
        .await?
        .into_iter()
        .map(|detail| SelectOption {
            id: detail.student.id,
            label: format!(
                "{} - {} {}",
                detail.student.student_code, detail.student.first_name, detail.student.last_name
            ),
        })
        .collect();
    let courses = get_courses()
        .await?
        .into_iter()
        .filter(|detail| detail.course.active)
        .map(|detail| SelectOption {
            id: detail.course.id,
            label: format!("{} - {}", detail.course.course_code, detail.course.name),
        })
        .collect();

    Ok(EnrollmentsData {
        enrollments,
        students,
        courses,
    })
}

#[component]
pub fn Enrollments() -> Element {
    let mut data = use_signal(|| None::<EnrollmentsData>);
    let mut error = use_signal(|| None::<ApiError>);
    let mut show_form = use_signal(|| false);
    let mut enrollment_to_edit = use_signal(|| None::<EnrollmentDetailDto>);
    let refetch_trigger = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        fetch_enrollments_data().await
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(fetched) => {
                    data.set(Some(fetched.clone()));
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!("Failed to fetch enrollments: {}", err);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    let loaded = data();
    let (students, courses) = loaded
        .as_ref()
        .map(|d| (d.students.clone(), d.courses.clone()))
        .unwrap_or_default();
    let is_loading = loaded.is_none();

    rsx! {
        Title { "Enrollments | {SITE_NAME}" }
        Page {
            div {
                class: "card",
                div {
                    class: "card-header",
                    h2 { "Enrollments" }
                    button {
                        class: "btn btn-primary",
                        disabled: is_loading,
                        onclick: move |_| {
                            enrollment_to_edit.set(None);
                            show_form.set(true);
                        },
                        "Add Enrollment"
                    }
                }

                if let Some(err) = error() {
                    ErrorAlert { message: format!("Error loading enrollments: {}", err.message) }
                }

                if let Some(loaded) = loaded {
                    if loaded.enrollments.is_empty() {
                        div {
                            class: "empty",
                            "No enrollments yet"
                        }
                    } else {
                        EnrollmentsTable {
                            enrollments: loaded.enrollments,
                            enrollment_to_edit,
                            show_form,
                            refetch_trigger
                        }
                    }
                } else if error().is_none() {
                    LoadingIndicator { }
                }

                EnrollmentFormModal {
                    show: show_form,
                    enrollment_to_edit,
                    students,
                    courses,
                    refetch_trigger
                }
            }
        }
    }
}

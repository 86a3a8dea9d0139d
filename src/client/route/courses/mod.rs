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
    model::course::{CourseDetailDto, CourseDto},
};

use modal::CourseFormModal;
use table::CoursesTable;

#[cfg(feature = "web")]
use crate::client::api::course::get_courses;

#[component]
pub fn Courses() -> Element {
    let mut courses = use_signal(|| None::<Vec<CourseDetailDto>>);
    let mut error = use_signal(|| None::<ApiError>);
    let mut show_form = use_signal(|| false);
    let mut course_to_edit = use_signal(|| None::<CourseDto>);
    let refetch_trigger = use_signal(|| 0u32);

    // Re-runs whenever refetch_trigger changes
    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        get_courses().await
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(data) => {
                    courses.set(Some(data.clone()));
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!("Failed to fetch courses: {}", err);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    rsx! {
        Title { "Courses | {SITE_NAME}" }
        Page {
            div {
                class: "card",
                div {
                    class: "card-header",
                    h2 { "Courses" }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            course_to_edit.set(None);
                            show_form.set(true);
                        },
                        "Add Course"
                    }
                }

                if let Some(err) = error() {
                    ErrorAlert { message: format!("Error loading courses: {}", err.message) }
                }

                if let Some(data) = courses() {
                    if data.is_empty() {
                        div {
                            class: "empty",
                            "No courses in the catalogue"
                        }
                    } else {
                        CoursesTable {
                            courses: data,
                            course_to_edit,
                            show_form,
                            refetch_trigger
                        }
                    }
                } else if error().is_none() {
                    LoadingIndicator { }
                }

                CourseFormModal {
                    show: show_form,
                    course_to_edit,
                    refetch_trigger
                }
            }
        }
    }
}

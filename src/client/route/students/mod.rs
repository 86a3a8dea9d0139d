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
    model::student::{StudentDetailDto, StudentDto},
};

use modal::StudentFormModal;
use table::StudentsTable;

#[cfg(feature = "web")]
use crate::client::api::student::get_students;

#[component]
pub fn Students() -> Element {
    let mut students = use_signal(|| None::<Vec<StudentDetailDto>>);
    let mut error = use_signal(|| None::<ApiError>);
    let mut show_form = use_signal(|| false);
    let mut student_to_edit = use_signal(|| None::<StudentDto>);
    let refetch_trigger = use_signal(|| 0u32);

    // Re-runs whenever refetch_trigger changes
    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        get_students().await
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(data) => {
                    students.set(Some(data.clone()));
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!("Failed to fetch students: {}", err);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    rsx! {
        Title { "Students | {SITE_NAME}" }
        Page {
            div {
                class: "card",
                div {
                    class: "card-header",
                    h2 { "Students" }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            student_to_edit.set(None);
                            show_form.set(true);
                        },
                        "Add Student"
                    }
                }

                if let Some(err) = error() {
                    ErrorAlert { message: format!("Error loading students: {}", err.message) }
                }

                if let Some(data) = students() {
                    if data.is_empty() {
                        div {
                            class: "empty",
                            "No students registered"
                        }
                    } else {
                        StudentsTable {
                            students: data,
                            student_to_edit,
                            show_form,
                            refetch_trigger
                        }
                    }
                } else if error().is_none() {
                    LoadingIndicator { }
                }

                StudentFormModal {
                    show: show_form,
                    student_to_edit,
                    refetch_trigger
                }
            }
        }
    }
}

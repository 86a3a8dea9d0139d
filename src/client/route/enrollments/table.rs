use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::component::ConfirmationModal,
    model::enrollment::{EnrollmentDetailDto, EnrollmentStatus},
};

#[cfg(feature = "web")]
use crate::client::api::enrollment::delete_enrollment;

fn status_badge(status: EnrollmentStatus) -> &'static str {
    match status {
        EnrollmentStatus::Enrolled => "badge badge-info",
        EnrollmentStatus::Passed => "badge badge-success",
        EnrollmentStatus::Failed => "badge badge-error",
        EnrollmentStatus::Withdrawn => "badge badge-ghost",
    }
}

#[component]
pub fn EnrollmentsTable(
    enrollments: Vec<EnrollmentDetailDto>,
    mut enrollment_to_edit: Signal<Option<EnrollmentDetailDto>>,
    mut show_form: Signal<bool>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let mut show_delete_modal = use_signal(|| false);
    let mut enrollment_to_delete = use_signal(|| None::<(i32, String)>);
    let mut is_deleting = use_signal(|| false);
    let mut delete_error = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    let delete_future = use_resource(move || async move {
        if is_deleting() {
            if let Some((id, _)) = enrollment_to_delete() {
                Some(delete_enrollment(id).await)
            } else {
                None
            }
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = delete_future.read_unchecked().as_ref() {
            match result {
                Ok(_) => {
                    refetch_trigger.set(refetch_trigger() + 1);
                    show_delete_modal.set(false);
                    is_deleting.set(false);
                }
                Err(err) => {
                    tracing::error!("Failed to delete enrollment: {}", err);
                    delete_error.set(Some(err.message.clone()));
                    is_deleting.set(false);
                }
            }
        }
    });

    let delete_message = enrollment_to_delete()
        .map(|(_, description)| format!("Remove the enrollment of {}?", description))
        .unwrap_or_default();

    rsx!(
        div {
            class: "overflow-x-auto",
            table {
                class: "table table-zebra",
                thead {
                    tr {
                        th { "Student" }
                        th { "Course" }
                        th { "Status" }
                        th { "Grade" }
                        th { "Enrolled" }
                        th { "Completed" }
                        th { "Attempts" }
                        th {
                            class: "text-right",
                            "Actions"
                        }
                    }
                }
                tbody {
                    for detail in enrollments {
                        {
                            let enrollment = detail.enrollment.clone();
                            let enrollment_id = enrollment.id;
                            let student_name = detail
                                .student
                                .as_ref()
                                .map(|s| format!("{} {}", s.first_name, s.last_name))
                                .unwrap_or_else(|| format!("Student #{}", enrollment.student_id));
                            let course_name = detail
                                .course
                                .as_ref()
                                .map(|c| format!("{} - {}", c.course_code, c.name))
                                .unwrap_or_else(|| format!("Course #{}", enrollment.course_id));
                            let description = format!("{} in {}", student_name, course_name);
                            let grade = enrollment
                                .grade
                                .map(|g| format!("{:.1}", g))
                                .unwrap_or_else(|| "-".to_string());
                            let completed = enrollment
                                .completed_on
                                .map(|d| d.to_string())
                                .unwrap_or_else(|| "-".to_string());
                            let detail_for_edit = detail.clone();
                            rsx! {
                                tr {
                                    key: "{enrollment_id}",
                                    td { "{student_name}" }
                                    td { "{course_name}" }
                                    td {
                                        span {
                                            class: status_badge(enrollment.status),
                                            "{enrollment.status}"
                                        }
                                    }
                                    td { "{grade}" }
                                    td { "{enrollment.enrolled_on}" }
                                    td { "{completed}" }
                                    td { "{enrollment.attempts}" }
                                    td {
                                        div {
                                            class: "actions",
                                            button {
                                                class: "btn btn-sm btn-primary",
                                                onclick: move |_| {
                                                    enrollment_to_edit.set(Some(detail_for_edit.clone()));
                                                    show_form.set(true);
                                                },
                                                "Edit"
                                            }
                                            button {
                                                class: "btn btn-sm btn-error",
                                                onclick: move |_| {
                                                    enrollment_to_delete.set(Some((enrollment_id, description.clone())));
                                                    delete_error.set(None);
                                                    show_delete_modal.set(true);
                                                },
                                                "Delete"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        ConfirmationModal {
            show: show_delete_modal,
            title: "Delete Enrollment".to_string(),
            message: delete_message,
            is_processing: is_deleting(),
            error: delete_error(),
            on_confirm: move |_| {
                delete_error.set(None);
                is_deleting.set(true);
            }
        }
    )
}

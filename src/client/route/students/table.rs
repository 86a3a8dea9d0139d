use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::component::ConfirmationModal,
    model::student::{StudentDetailDto, StudentDto, StudentStatus},
};

#[cfg(feature = "web")]
use crate::client::api::student::delete_student;

fn status_badge(status: StudentStatus) -> &'static str {
    match status {
        StudentStatus::Active => "badge badge-success",
        StudentStatus::Inactive => "badge badge-ghost",
        StudentStatus::Graduated => "badge badge-info",
        StudentStatus::Suspended => "badge badge-error",
    }
}

#[component]
pub fn StudentsTable(
    students: Vec<StudentDetailDto>,
    mut student_to_edit: Signal<Option<StudentDto>>,
    mut show_form: Signal<bool>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let mut show_delete_modal = use_signal(|| false);
    let mut student_to_delete = use_signal(|| None::<(i32, String)>);
    let mut is_deleting = use_signal(|| false);
    let mut delete_error = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    let delete_future = use_resource(move || async move {
        if is_deleting() {
            if let Some((id, _)) = student_to_delete() {
                Some(delete_student(id).await)
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
                    tracing::error!("Failed to delete student: {}", err);
                    delete_error.set(Some(err.message.clone()));
                    is_deleting.set(false);
                }
            }
        }
    });

    let delete_message = student_to_delete()
        .map(|(_, name)| {
            format!("Delete {}? Their enrollments will be removed as well.", name)
        })
        .unwrap_or_default();

    rsx!(
        div {
            class: "overflow-x-auto",
            table {
                class: "table table-zebra",
                thead {
                    tr {
                        th { "Code" }
                        th { "Name" }
                        th { "Email" }
                        th { "Status" }
                        th { "GPA" }
                        th { "Credits" }
                        th { "Courses" }
                        th {
                            class: "text-right",
                            "Actions"
                        }
                    }
                }
                tbody {
                    for detail in students {
                        {
                            let student = detail.student.clone();
                            let student_id = student.id;
                            let full_name = format!("{} {}", student.first_name, student.last_name);
                            let name_for_delete = full_name.clone();
                            let student_for_edit = student.clone();
                            let course_names: Vec<String> = detail
                                .enrollments
                                .iter()
                                .filter_map(|e| e.course.as_ref().map(|c| c.course_code.clone()))
                                .collect();
                            let course_display = course_names.join(", ");
                            let gpa = format!("{:.2}", student.gpa);
                            rsx! {
                                tr {
                                    key: "{student_id}",
                                    td { "{student.student_code}" }
                                    td { "{full_name}" }
                                    td { "{student.email}" }
                                    td {
                                        span {
                                            class: status_badge(student.status),
                                            "{student.status}"
                                        }
                                    }
                                    td { "{gpa}" }
                                    td { "{student.credits_completed}" }
                                    td {
                                        if course_names.is_empty() {
                                            span { class: "muted", "None" }
                                        } else {
                                            span { "{course_display}" }
                                        }
                                    }
                                    td {
                                        div {
                                            class: "actions",
                                            button {
                                                class: "btn btn-sm btn-primary",
                                                onclick: move |_| {
                                                    student_to_edit.set(Some(student_for_edit.clone()));
                                                    show_form.set(true);
                                                },
                                                "Edit"
                                            }
                                            button {
                                                class: "btn btn-sm btn-error",
                                                onclick: move |_| {
                                                    student_to_delete.set(Some((student_id, name_for_delete.clone())));
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
            title: "Delete Student".to_string(),
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

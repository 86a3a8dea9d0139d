use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::component::ConfirmationModal,
    model::course::{CourseDetailDto, CourseDto, CourseLevel},
};

#[cfg(feature = "web")]
use crate::client::api::course::delete_course;

fn level_badge(level: CourseLevel) -> &'static str {
    match level {
        CourseLevel::Basic => "badge badge-ghost",
        CourseLevel::Intermediate => "badge badge-info",
        CourseLevel::Advanced => "badge badge-warning",
        CourseLevel::Expert => "badge badge-error",
    }
}

#[component]
pub fn CoursesTable(
    courses: Vec<CourseDetailDto>,
    mut course_to_edit: Signal<Option<CourseDto>>,
    mut show_form: Signal<bool>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let mut show_delete_modal = use_signal(|| false);
    let mut course_to_delete = use_signal(|| None::<(i32, String)>);
    let mut is_deleting = use_signal(|| false);
    let mut delete_error = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    let delete_future = use_resource(move || async move {
        if is_deleting() {
            if let Some((id, _)) = course_to_delete() {
                Some(delete_course(id).await)
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
                    // Courses with enrolled students are refused by the server
                    tracing::error!("Failed to delete course: {}", err);
                    delete_error.set(Some(err.message.clone()));
                    is_deleting.set(false);
                }
            }
        }
    });

    let delete_message = course_to_delete()
        .map(|(_, name)| format!("Delete the course {}?", name))
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
                        th { "Credits" }
                        th { "Level" }
                        th { "Active" }
                        th { "Enrolled" }
                        th {
                            class: "text-right",
                            "Actions"
                        }
                    }
                }
                tbody {
                    for detail in courses {
                        {
                            let course = detail.course.clone();
                            let course_id = course.id;
                            let name_for_delete = course.name.clone();
                            let course_for_edit = course.clone();
                            let enrolled = detail.enrollments.len();
                            rsx! {
                                tr {
                                    key: "{course_id}",
                                    td { "{course.course_code}" }
                                    td {
                                        div { "{course.name}" }
                                        if let Some(prerequisites) = course.prerequisites.clone() {
                                            div { class: "muted", "Requires: {prerequisites}" }
                                        }
                                    }
                                    td { "{course.credits}" }
                                    td {
                                        span {
                                            class: level_badge(course.level),
                                            "{course.level}"
                                        }
                                    }
                                    td {
                                        if course.active {
                                            span { class: "badge badge-success", "Yes" }
                                        } else {
                                            span { class: "badge badge-ghost", "No" }
                                        }
                                    }
                                    td { "{enrolled}" }
                                    td {
                                        div {
                                            class: "actions",
                                            button {
                                                class: "btn btn-sm btn-primary",
                                                onclick: move |_| {
                                                    course_to_edit.set(Some(course_for_edit.clone()));
                                                    show_form.set(true);
                                                },
                                                "Edit"
                                            }
                                            button {
                                                class: "btn btn-sm btn-error",
                                                onclick: move |_| {
                                                    course_to_delete.set(Some((course_id, name_for_delete.clone())));
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
            title: "Delete Course".to_string(),
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

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::component::{ErrorAlert, Modal},
    model::enrollment::{
        CreateEnrollmentDto, EnrollmentDetailDto, EnrollmentStatus, UpdateEnrollmentDto,
    },
};

use super::SelectOption;

#[cfg(feature = "web")]
use crate::client::api::enrollment::{create_enrollment, update_enrollment};

/// Form field values. Numbers stay text until submission.
#[derive(Clone, PartialEq)]
struct EnrollmentForm {
    student_id: String,
    course_id: String,
    status: EnrollmentStatus,
    grade: String,
    enrolled_on: String,
    completed_on: String,
    attempts: String,
}

impl Default for EnrollmentForm {
    fn default() -> Self {
        Self {
            student_id: String::new(),
            course_id: String::new(),
            status: EnrollmentStatus::default(),
            grade: String::new(),
            enrolled_on: String::new(),
            completed_on: String::new(),
            attempts: "1".to_string(),
        }
    }
}

impl EnrollmentForm {
    fn from_dto(detail: &EnrollmentDetailDto) -> Self {
        let enrollment = &detail.enrollment;
        Self {
            student_id: enrollment.student_id.to_string(),
            course_id: enrollment.course_id.to_string(),
            status: enrollment.status,
            grade: enrollment.grade.map(|g| g.to_string()).unwrap_or_default(),
            enrolled_on: enrollment.enrolled_on.to_string(),
            completed_on: enrollment
                .completed_on
                .map(|d| d.to_string())
                .unwrap_or_default(),
            attempts: enrollment.attempts.to_string(),
        }
    }

    fn parse_grade(&self) -> Result<Option<f64>, String> {
        let grade = self.grade.trim();
        if grade.is_empty() {
            return Ok(None);
        }

        match grade.parse::<f64>() {
            Ok(value) if (0.0..=100.0).contains(&value) => Ok(Some(value)),
            _ => Err("Grade must be a number between 0 and 100".to_string()),
        }
    }

    fn into_create_dto(self) -> Result<CreateEnrollmentDto, String> {
        let student_id = self
            .student_id
            .parse::<i32>()
            .map_err(|_| "Select a student".to_string())?;
        let course_id = self
            .course_id
            .parse::<i32>()
            .map_err(|_| "Select a course".to_string())?;

        Ok(CreateEnrollmentDto {
            student_id,
            course_id,
            status: Some(self.status.to_string()),
            grade: self.parse_grade()?,
        })
    }

    /// A blank grade is sent as `null` and a blank completion date as an empty string,
    /// so the server clears both.
    fn into_update_dto(self) -> Result<UpdateEnrollmentDto, String> {
        let attempts = match self.attempts.trim().parse::<i32>() {
            Ok(attempts) if attempts >= 1 => attempts,
            _ => return Err("Attempts must be at least 1".to_string()),
        };
        let enrolled_on = self.enrolled_on.trim();

        Ok(UpdateEnrollmentDto {
            grade: Some(self.parse_grade()?),
            enrolled_on: (!enrolled_on.is_empty()).then(|| enrolled_on.to_string()),
            completed_on: Some(self.completed_on.trim().to_string()),
            status: Some(self.status.to_string()),
            attempts: Some(attempts),
        })
    }
}

#[derive(Clone, PartialEq)]
enum Submission {
    Create(CreateEnrollmentDto),
    Update(i32, UpdateEnrollmentDto),
}

/// Create/edit form. Student and course can only be chosen when creating.
#[component]
pub fn EnrollmentFormModal(
    mut show: Signal<bool>,
    enrollment_to_edit: Signal<Option<EnrollmentDetailDto>>,
    students: Vec<SelectOption>,
    courses: Vec<SelectOption>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let mut form_fields = use_signal(EnrollmentForm::default);
    let mut submission = use_signal(|| None::<Submission>);
    let mut error = use_signal(|| None::<String>);

    use_effect(move || {
        if show() {
            let initial = enrollment_to_edit()
                .as_ref()
                .map(EnrollmentForm::from_dto)
                .unwrap_or_default();
            form_fields.set(initial);
            submission.set(None);
            error.set(None);
        }
    });

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        match submission() {
            Some(Submission::Create(dto)) => Some(create_enrollment(dto).await.map(|_| ())),
            Some(Submission::Update(id, dto)) => {
                Some(update_enrollment(id, dto).await.map(|_| ()))
            }
            None => None,
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = future.read_unchecked().as_ref() {
            match result {
                Ok(_) => {
                    submission.set(None);
                    refetch_trigger.set(refetch_trigger() + 1);
                    show.set(false);
                }
                Err(err) => {
                    tracing::error!("Failed to save enrollment: {}", err);
                    error.set(Some(err.message.clone()));
                    submission.set(None);
                }
            }
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        let values = form_fields();
        let next = match enrollment_to_edit() {
            Some(detail) => values
                .into_update_dto()
                .map(|dto| Submission::Update(detail.enrollment.id, dto)),
            None => values.into_create_dto().map(Submission::Create),
        };

        match next {
            Ok(next) => {
                error.set(None);
                submission.set(Some(next));
            }
            Err(message) => error.set(Some(message)),
        }
    };

    let is_submitting = submission().is_some();
    let editing = enrollment_to_edit();
    let title = if editing.is_some() {
        "Edit Enrollment"
    } else {
        "Add Enrollment"
    };
    let editing_label = editing.as_ref().map(|detail| {
        let student = detail
            .student
            .as_ref()
            .map(|s| format!("{} {}", s.first_name, s.last_name))
            .unwrap_or_default();
        let course = detail
            .course
            .as_ref()
            .map(|c| c.name.clone())
            .unwrap_or_default();
        format!("{} in {}", student, course)
    });

    rsx!(
        Modal {
            show,
            title: title.to_string(),
            prevent_close: is_submitting,
            form {
                class: "form",
                onsubmit: on_submit,

                if let Some(heading) = editing_label {
                    p { class: "muted", "{heading}" }
                } else {
                    label {
                        class: "form-control",
                        span { class: "label", "Student" }
                        select {
                            class: "select",
                            disabled: is_submitting,
                            onchange: move |evt| form_fields.write().student_id = evt.value(),
                            option {
                                value: "",
                                selected: form_fields.read().student_id.is_empty(),
                                "Select a student"
                            }
                            for student in students {
                                option {
                                    value: "{student.id}",
                                    selected: form_fields.read().student_id == student.id.to_string(),
                                    "{student.label}"
                                }
                            }
                        }
                    }
                    label {
                        class: "form-control",
                        span { class: "label", "Course" }
                        select {
                            class: "select",
                            disabled: is_submitting,
                            onchange: move |evt| form_fields.write().course_id = evt.value(),
                            option {
                                value: "",
                                selected: form_fields.read().course_id.is_empty(),
                                "Select a course"
                            }
                            for course in courses {
                                option {
                                    value: "{course.id}",
                                    selected: form_fields.read().course_id == course.id.to_string(),
                                    "{course.label}"
                                }
                            }
                        }
                    }
                }
                div {
                    class: "form-row",
                    label {
                        class: "form-control",
                        span { class: "label", "Status" }
                        select {
                            class: "select",
                            disabled: is_submitting,
                            onchange: move |evt| {
                                if let Ok(status) = evt.value().parse::<EnrollmentStatus>() {
                                    form_fields.write().status = status;
                                }
                            },
                            for status in EnrollmentStatus::ALL {
                                option {
                                    value: status.as_str(),
                                    selected: form_fields.read().status == status,
                                    "{status}"
                                }
                            }
                        }
                    }
                    label {
                        class: "form-control",
                        span { class: "label", "Grade" }
                        input {
                            class: "input",
                            r#type: "number",
                            min: "0",
                            max: "100",
                            step: "0.1",
                            value: "{form_fields.read().grade}",
                            disabled: is_submitting,
                            oninput: move |evt| form_fields.write().grade = evt.value(),
                        }
                    }
                }
                if editing.is_some() {
                    div {
                        class: "form-row",
                        label {
                            class: "form-control",
                            span { class: "label", "Enrolled on" }
                            input {
                                class: "input",
                                r#type: "date",
                                value: "{form_fields.read().enrolled_on}",
                                disabled: is_submitting,
                                oninput: move |evt| form_fields.write().enrolled_on = evt.value(),
                            }
                        }
                        label {
                            class: "form-control",
                            span { class: "label", "Completed on" }
                            input {
                                class: "input",
                                r#type: "date",
                                value: "{form_fields.read().completed_on}",
                                disabled: is_submitting,
                                oninput: move |evt| form_fields.write().completed_on = evt.value(),
                            }
                        }
                    }
                    label {
                        class: "form-control",
                        span { class: "label", "Attempts" }
                        input {
                            class: "input",
                            r#type: "number",
                            min: "1",
                            value: "{form_fields.read().attempts}",
                            disabled: is_submitting,
                            oninput: move |evt| form_fields.write().attempts = evt.value(),
                        }
                    }
                }

                if let Some(err) = error() {
                    ErrorAlert { message: err }
                }

                div {
                    class: "modal-action",
                    button {
                        r#type: "button",
                        class: "btn",
                        onclick: move |_| show.set(false),
                        disabled: is_submitting,
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: is_submitting,
                        if is_submitting {
                            span { class: "loading loading-spinner loading-sm" }
                            "Saving..."
                        } else {
                            "Save"
                        }
                    }
                }
            }
        }
    )
}

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::component::{ErrorAlert, Modal},
    model::student::{CreateStudentDto, StudentDto, StudentStatus, UpdateStudentDto},
};

#[cfg(feature = "web")]
use crate::client::api::student::{create_student, update_student};

/// Form field values
#[derive(Clone, Default, PartialEq)]
struct StudentForm {
    student_code: String,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    birth_date: String,
    admission_date: String,
    status: StudentStatus,
}

impl StudentForm {
    fn from_dto(student: &StudentDto) -> Self {
        Self {
            student_code: student.student_code.clone(),
            first_name: student.first_name.clone(),
            last_name: student.last_name.clone(),
            email: student.email.clone(),
            phone: student.phone.clone().unwrap_or_default(),
            birth_date: student
                .birth_date
                .map(|d| d.to_string())
                .unwrap_or_default(),
            admission_date: student.admission_date.to_string(),
            status: student.status,
        }
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("Code", &self.student_code),
            ("First name", &self.first_name),
            ("Last name", &self.last_name),
            ("Email", &self.email),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| label)
        .collect()
    }

    fn into_create_dto(self) -> CreateStudentDto {
        CreateStudentDto {
            student_code: self.student_code,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: non_empty(self.phone),
            birth_date: non_empty(self.birth_date),
            admission_date: non_empty(self.admission_date),
            status: Some(self.status.to_string()),
        }
    }

    /// Empty phone and birth date are sent as empty strings so the server clears them.
    fn into_update_dto(self) -> UpdateStudentDto {
        UpdateStudentDto {
            student_code: Some(self.student_code),
            first_name: Some(self.first_name),
            last_name: Some(self.last_name),
            email: Some(self.email),
            phone: Some(self.phone),
            birth_date: Some(self.birth_date),
            admission_date: non_empty(self.admission_date),
            status: Some(self.status.to_string()),
            ..Default::default()
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[derive(Clone, PartialEq)]
enum Submission {
    Create(CreateStudentDto),
    Update(i32, UpdateStudentDto),
}

/// Create/edit form. Edits `student_to_edit` when set, otherwise creates a new student.
#[component]
pub fn StudentFormModal(
    mut show: Signal<bool>,
    student_to_edit: Signal<Option<StudentDto>>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let mut form_fields = use_signal(StudentForm::default);
    let mut submission = use_signal(|| None::<Submission>);
    let mut error = use_signal(|| None::<String>);

    // Reset or prefill the form when the modal opens
    use_effect(move || {
        if show() {
            let initial = student_to_edit()
                .as_ref()
                .map(StudentForm::from_dto)
                .unwrap_or_default();
            form_fields.set(initial);
            submission.set(None);
            error.set(None);
        }
    });

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        match submission() {
            Some(Submission::Create(dto)) => Some(create_student(dto).await.map(|_| ())),
            Some(Submission::Update(id, dto)) => Some(update_student(id, dto).await.map(|_| ())),
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
                    tracing::error!("Failed to save student: {}", err);
                    error.set(Some(err.message.clone()));
                    submission.set(None);
                }
            }
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        let values = form_fields();
        let missing = values.missing_fields();
        if !missing.is_empty() {
            error.set(Some(format!("Required: {}", missing.join(", "))));
            return;
        }

        error.set(None);
        let next = match student_to_edit() {
            Some(student) => Submission::Update(student.id, values.into_update_dto()),
            None => Submission::Create(values.into_create_dto()),
        };
        submission.set(Some(next));
    };

    let is_submitting = submission().is_some();
    let is_edit = student_to_edit().is_some();
    let title = if is_edit { "Edit Student" } else { "Add Student" };

    rsx!(
        Modal {
            show,
            title: title.to_string(),
            prevent_close: is_submitting,
            form {
                class: "form",
                onsubmit: on_submit,

                div {
                    class: "form-row",
                    label {
                        class: "form-control",
                        span { class: "label", "Code" }
                        input {
                            class: "input",
                            value: "{form_fields.read().student_code}",
                            disabled: is_submitting,
                            oninput: move |evt| form_fields.write().student_code = evt.value(),
                        }
                    }
                    label {
                        class: "form-control",
                        span { class: "label", "Status" }
                        select {
                            class: "select",
                            disabled: is_submitting,
                            onchange: move |evt| {
                                if let Ok(status) = evt.value().parse::<StudentStatus>() {
                                    form_fields.write().status = status;
                                }
                            },
                            for status in StudentStatus::ALL {
                                option {
                                    value: status.as_str(),
                                    selected: form_fields.read().status == status,
                                    "{status}"
                                }
                            }
                        }
                    }
                }
                div {
                    class: "form-row",
                    label {
                        class: "form-control",
                        span { class: "label", "First name" }
                        input {
                            class: "input",
                            value: "{form_fields.read().first_name}",
                            disabled: is_submitting,
                            oninput: move |evt| form_fields.write().first_name = evt.value(),
                        }
                    }
                    label {
                        class: "form-control",
                        span { class: "label", "Last name" }
                        input {
                            class: "input",
                            value: "{form_fields.read().last_name}",
                            disabled: is_submitting,
                            oninput: move |evt| form_fields.write().last_name = evt.value(),
                        }
                    }
                }
                label {
                    class: "form-control",
                    span { class: "label", "Email" }
                    input {
                        class: "input",
                        r#type: "email",
                        value: "{form_fields.read().email}",
                        disabled: is_submitting,
                        oninput: move |evt| form_fields.write().email = evt.value(),
                    }
                }
                label {
                    class: "form-control",
                    span { class: "label", "Phone" }
                    input {
                        class: "input",
                        value: "{form_fields.read().phone}",
                        disabled: is_submitting,
                        oninput: move |evt| form_fields.write().phone = evt.value(),
                    }
                }
                div {
                    class: "form-row",
                    label {
                        class: "form-control",
                        span { class: "label", "Birth date" }
                        input {
                            class: "input",
                            r#type: "date",
                            value: "{form_fields.read().birth_date}",
                            disabled: is_submitting,
                            oninput: move |evt| form_fields.write().birth_date = evt.value(),
                        }
                    }
                    label {
                        class: "form-control",
                        span { class: "label", "Admission date" }
                        input {
                            class: "input",
                            r#type: "date",
                            value: "{form_fields.read().admission_date}",
                            disabled: is_submitting,
                            oninput: move |evt| form_fields.write().admission_date = evt.value(),
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
                        } else if is_edit {
                            "Save"
                        } else {
                            "Create"
                        }
                    }
                }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_clears_blank_optional_fields() {
        let form = StudentForm {
            student_code: "STU-1".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            admission_date: "2024-09-01".to_string(),
            ..Default::default()
        };

        let dto = form.into_update_dto();

        assert_eq!(dto.phone.as_deref(), Some(""));
        assert_eq!(dto.birth_date.as_deref(), Some(""));
        assert_eq!(dto.admission_date.as_deref(), Some("2024-09-01"));
        assert_eq!(dto.status.as_deref(), Some("ACTIVE"));
    }

    #[test]
    fn create_omits_blank_optional_fields() {
        let form = StudentForm {
            phone: "  ".to_string(),
            ..Default::default()
        };

        assert_eq!(
            form.missing_fields(),
            vec!["Code", "First name", "Last name", "Email"]
        );
        assert_eq!(form.into_create_dto().phone, None);
    }
}

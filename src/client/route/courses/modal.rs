use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::component::{ErrorAlert, Modal},
    model::course::{CourseDto, CourseLevel, CreateCourseDto, UpdateCourseDto},
};

#[cfg(feature = "web")]
use crate::client::api::course::{create_course, update_course};

/// Form field values. Credits stay text until submission so partial input can be edited.
#[derive(Clone, PartialEq)]
struct CourseForm {
    course_code: String,
    name: String,
    description: String,
    credits: String,
    level: CourseLevel,
    prerequisites: String,
    active: bool,
}

impl Default for CourseForm {
    fn default() -> Self {
        Self {
            course_code: String::new(),
            name: String::new(),
            description: String::new(),
            credits: "3".to_string(),
            level: CourseLevel::default(),
            prerequisites: String::new(),
            active: true,
        }
    }
}

impl CourseForm {
    fn from_dto(course: &CourseDto) -> Self {
        Self {
            course_code: course.course_code.clone(),
            name: course.name.clone(),
            description: course.description.clone().unwrap_or_default(),
            credits: course.credits.to_string(),
            level: course.level,
            prerequisites: course.prerequisites.clone().unwrap_or_default(),
            active: course.active,
        }
    }

    /// Checks required fields and parses the credits.
    fn validate(&self) -> Result<i32, String> {
        if self.course_code.trim().is_empty() || self.name.trim().is_empty() {
            return Err("Code and name are required".to_string());
        }

        match self.credits.trim().parse::<i32>() {
            Ok(credits) if credits > 0 => Ok(credits),
            _ => Err("Credits must be a whole number greater than 0".to_string()),
        }
    }

    fn into_create_dto(self, credits: i32) -> CreateCourseDto {
        CreateCourseDto {
            course_code: self.course_code,
            name: self.name,
            description: non_empty(self.description),
            credits,
            level: Some(self.level.to_string()),
            prerequisites: non_empty(self.prerequisites),
        }
    }

    fn into_update_dto(self, credits: i32) -> UpdateCourseDto {
        UpdateCourseDto {
            course_code: Some(self.course_code),
            name: Some(self.name),
            description: Some(self.description),
            credits: Some(credits),
            level: Some(self.level.to_string()),
            prerequisites: Some(self.prerequisites),
            active: Some(self.active),
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[derive(Clone, PartialEq)]
enum Submission {
    Create(CreateCourseDto),
    Update(i32, UpdateCourseDto),
}

#[component]
pub fn CourseFormModal(
    mut show: Signal<bool>,
    course_to_edit: Signal<Option<CourseDto>>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let mut form_fields = use_signal(CourseForm::default);
    let mut submission = use_signal(|| None::<Submission>);
    let mut error = use_signal(|| None::<String>);

    use_effect(move || {
        if show() {
            let initial = course_to_edit()
                .as_ref()
                .map(CourseForm::from_dto)
                .unwrap_or_default();
            form_fields.set(initial);
            submission.set(None);
            error.set(None);
        }
    });

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        match submission() {
            Some(Submission::Create(dto)) => Some(create_course(dto).await.map(|_| ())),
            Some(Submission::Update(id, dto)) => Some(update_course(id, dto).await.map(|_| ())),
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
                    tracing::error!("Failed to save course: {}", err);
                    error.set(Some(err.message.clone()));
                    submission.set(None);
                }
            }
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        let values = form_fields();
        let credits = match values.validate() {
            Ok(credits) => credits,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };

        error.set(None);
        let next = match course_to_edit() {
            Some(course) => Submission::Update(course.id, values.into_update_dto(credits)),
            None => Submission::Create(values.into_create_dto(credits)),
        };
        submission.set(Some(next));
    };

    let is_submitting = submission().is_some();
    let is_edit = course_to_edit().is_some();
    let title = if is_edit { "Edit Course" } else { "Add Course" };

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
                            value: "{form_fields.read().course_code}",
                            disabled: is_submitting,
                            oninput: move |evt| form_fields.write().course_code = evt.value(),
                        }
                    }
                    label {
                        class: "form-control",
                        span { class: "label", "Credits" }
                        input {
                            class: "input",
                            r#type: "number",
                            min: "1",
                            value: "{form_fields.read().credits}",
                            disabled: is_submitting,
                            oninput: move |evt| form_fields.write().credits = evt.value(),
                        }
                    }
                }
                label {
                    class: "form-control",
                    span { class: "label", "Name" }
                    input {
                        class: "input",
                        value: "{form_fields.read().name}",
                        disabled: is_submitting,
                        oninput: move |evt| form_fields.write().name = evt.value(),
                    }
                }
                label {
                    class: "form-control",
                    span { class: "label", "Description" }
                    textarea {
                        class: "textarea",
                        value: "{form_fields.read().description}",
                        disabled: is_submitting,
                        oninput: move |evt| form_fields.write().description = evt.value(),
                    }
                }
                div {
                    class: "form-row",
                    label {
                        class: "form-control",
                        span { class: "label", "Level" }
                        select {
                            class: "select",
                            disabled: is_submitting,
                            onchange: move |evt| {
                                if let Ok(level) = evt.value().parse::<CourseLevel>() {
                                    form_fields.write().level = level;
                                }
                            },
                            for level in CourseLevel::ALL {
                                option {
                                    value: level.as_str(),
                                    selected: form_fields.read().level == level,
                                    "{level}"
                                }
                            }
                        }
                    }
                    label {
                        class: "form-control",
                        span { class: "label", "Prerequisites" }
                        input {
                            class: "input",
                            value: "{form_fields.read().prerequisites}",
                            disabled: is_submitting,
                            oninput: move |evt| form_fields.write().prerequisites = evt.value(),
                        }
                    }
                }
                if is_edit {
                    label {
                        class: "checkbox-row",
                        input {
                            r#type: "checkbox",
                            checked: form_fields.read().active,
                            disabled: is_submitting,
                            onchange: move |evt| form_fields.write().active = evt.checked(),
                        }
                        span { "Active" }
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
    fn rejects_non_positive_credits() {
        let form = CourseForm {
            course_code: "MAT-101".to_string(),
            name: "Calculus".to_string(),
            credits: "0".to_string(),
            ..Default::default()
        };

        assert!(form.validate().is_err());
    }

    #[test]
    fn builds_create_dto_with_level() {
        let form = CourseForm {
            course_code: "MAT-101".to_string(),
            name: "Calculus".to_string(),
            credits: " 4 ".to_string(),
            level: CourseLevel::Advanced,
            ..Default::default()
        };

        let credits = form.validate().unwrap();
        let dto = form.into_create_dto(credits);

        assert_eq!(dto.credits, 4);
        assert_eq!(dto.level.as_deref(), Some("ADVANCED"));
        assert_eq!(dto.description, None);
    }
}

//! Student fixtures for creating in-memory test data.

use chrono::{DateTime, NaiveDate, Utc};
use entity::{sea_orm_active_enums::StudentStatus, student};

/// Default test student code.
pub const DEFAULT_STUDENT_CODE: &str = "STU-0001";

/// Default test first name.
pub const DEFAULT_FIRST_NAME: &str = "Ada";

/// Default test last name.
pub const DEFAULT_LAST_NAME: &str = "Lovelace";

/// Default test email.
pub const DEFAULT_EMAIL: &str = "ada@example.com";

/// Admission date used by fixtures, fixed so assertions stay deterministic.
pub fn default_admission_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, 1).unwrap_or_default()
}

/// Creates a student entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - student_code: `"STU-0001"`
/// - first_name / last_name: `"Ada"` / `"Lovelace"`
/// - email: `"ada@example.com"`
/// - status: `Active`, gpa `0.0`, credits_completed `0`
pub fn entity() -> student::Model {
    entity_builder().build()
}

/// Creates a student entity builder for customization.
pub fn entity_builder() -> StudentEntityBuilder {
    StudentEntityBuilder::default()
}

/// Builder for customized student entity models.
pub struct StudentEntityBuilder {
    id: i32,
    student_code: String,
    first_name: String,
    last_name: String,
    email: String,
    phone: Option<String>,
    birth_date: Option<NaiveDate>,
    status: StudentStatus,
    gpa: f64,
    credits_completed: i32,
}

impl Default for StudentEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            student_code: DEFAULT_STUDENT_CODE.to_string(),
            first_name: DEFAULT_FIRST_NAME.to_string(),
            last_name: DEFAULT_LAST_NAME.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            phone: None,
            birth_date: None,
            status: StudentStatus::Active,
            gpa: 0.0,
            credits_completed: 0,
        }
    }
}

impl StudentEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn student_code(mut self, student_code: impl Into<String>) -> Self {
        self.student_code = student_code.into();
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn phone(mut self, phone: Option<String>) -> Self {
        self.phone = phone;
        self
    }

    pub fn birth_date(mut self, birth_date: Option<NaiveDate>) -> Self {
        self.birth_date = birth_date;
        self
    }

    pub fn status(mut self, status: StudentStatus) -> Self {
        self.status = status;
        self
    }

    pub fn gpa(mut self, gpa: f64) -> Self {
        self.gpa = gpa;
        self
    }

    pub fn credits_completed(mut self, credits_completed: i32) -> Self {
        self.credits_completed = credits_completed;
        self
    }

    /// Builds the student entity model.
    pub fn build(self) -> student::Model {
        let now: DateTime<Utc> = Utc::now();

        student::Model {
            id: self.id,
            student_code: self.student_code,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            birth_date: self.birth_date,
            admission_date: default_admission_date(),
            status: self.status,
            gpa: self.gpa,
            credits_completed: self.credits_completed,
            created_at: now,
            updated_at: now,
        }
    }
}

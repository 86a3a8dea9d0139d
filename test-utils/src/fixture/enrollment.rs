//! Enrollment fixtures for creating in-memory test data.

use chrono::NaiveDate;
use entity::{enrollment, sea_orm_active_enums::EnrollmentStatus};

/// Enrollment date used by fixtures.
pub fn default_enrolled_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap_or_default()
}

/// Creates an enrollment entity model with default values.
///
/// # Default Values
/// - id: `1`, student_id: `1`, course_id: `1`
/// - grade: `None`, status: `Enrolled`, attempts: `1`
pub fn entity() -> enrollment::Model {
    entity_builder().build()
}

/// Creates an enrollment entity builder for customization.
pub fn entity_builder() -> EnrollmentEntityBuilder {
    EnrollmentEntityBuilder::default()
}

/// Builder for customized enrollment entity models.
pub struct EnrollmentEntityBuilder {
    id: i32,
    student_id: i32,
    course_id: i32,
    grade: Option<f64>,
    completed_on: Option<NaiveDate>,
    status: EnrollmentStatus,
    attempts: i32,
}

impl Default for EnrollmentEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            student_id: 1,
            course_id: 1,
            grade: None,
            completed_on: None,
            status: EnrollmentStatus::Enrolled,
            attempts: 1,
        }
    }
}

impl EnrollmentEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn student_id(mut self, student_id: i32) -> Self {
        self.student_id = student_id;
        self
    }

    pub fn course_id(mut self, course_id: i32) -> Self {
        self.course_id = course_id;
        self
    }

    pub fn grade(mut self, grade: Option<f64>) -> Self {
        self.grade = grade;
        self
    }

    pub fn completed_on(mut self, completed_on: Option<NaiveDate>) -> Self {
        self.completed_on = completed_on;
        self
    }

    pub fn status(mut self, status: EnrollmentStatus) -> Self {
        self.status = status;
        self
    }

    pub fn attempts(mut self, attempts: i32) -> Self {
        self.attempts = attempts;
        self
    }

    /// Builds the enrollment entity model.
    pub fn build(self) -> enrollment::Model {
        enrollment::Model {
            id: self.id,
            student_id: self.student_id,
            course_id: self.course_id,
            grade: self.grade,
            enrolled_on: default_enrolled_on(),
            completed_on: self.completed_on,
            status: self.status,
            attempts: self.attempts,
        }
    }
}

//! Enrollment factory for creating test enrollment entities.

use crate::fixture;
use chrono::NaiveDate;
use entity::sea_orm_active_enums::EnrollmentStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test enrollments between an existing student and course.
///
/// # Example
///
/// ```rust,ignore
/// let enrollment = EnrollmentFactory::new(&db, student.id, course.id)
///     .status(EnrollmentStatus::Passed)
///     .grade(Some(87.5))
///     .build()
///     .await?;
/// ```
pub struct EnrollmentFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::enrollment::Model,
}

impl<'a> EnrollmentFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, student_id: i32, course_id: i32) -> Self {
        let entity = fixture::enrollment::entity_builder()
            .student_id(student_id)
            .course_id(course_id)
            .build();

        Self { db, entity }
    }

    pub fn grade(mut self, grade: Option<f64>) -> Self {
        self.entity.grade = grade;
        self
    }

    pub fn status(mut self, status: EnrollmentStatus) -> Self {
        self.entity.status = status;
        self
    }

    pub fn completed_on(mut self, completed_on: Option<NaiveDate>) -> Self {
        self.entity.completed_on = completed_on;
        self
    }

    pub fn attempts(mut self, attempts: i32) -> Self {
        self.entity.attempts = attempts;
        self
    }

    /// Inserts the enrollment entity into the database.
    pub async fn build(self) -> Result<entity::enrollment::Model, DbErr> {
        entity::enrollment::ActiveModel {
            id: ActiveValue::NotSet,
            student_id: ActiveValue::Set(self.entity.student_id),
            course_id: ActiveValue::Set(self.entity.course_id),
            grade: ActiveValue::Set(self.entity.grade),
            enrolled_on: ActiveValue::Set(self.entity.enrolled_on),
            completed_on: ActiveValue::Set(self.entity.completed_on),
            status: ActiveValue::Set(self.entity.status),
            attempts: ActiveValue::Set(self.entity.attempts),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an enrollment with default values for the given student and course.
pub async fn create_enrollment(
    db: &DatabaseConnection,
    student_id: i32,
    course_id: i32,
) -> Result<entity::enrollment::Model, DbErr> {
    EnrollmentFactory::new(db, student_id, course_id)
        .build()
        .await
}

//! Student factory for creating test student entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use entity::sea_orm_active_enums::StudentStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test students with customizable fields.
///
/// Defaults come from `fixture::student` with a unique code and email per instance.
///
/// # Example
///
/// ```rust,ignore
/// let student = StudentFactory::new(&db)
///     .first_name("Grace")
///     .status(StudentStatus::Graduated)
///     .build()
///     .await?;
/// ```
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::student::Model,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with code `STU-{n}` and email `student{n}@example.com`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::student::entity_builder()
            .student_code(format!("STU-{}", id))
            .email(format!("student{}@example.com", id))
            .build();

        Self { db, entity }
    }

    pub fn student_code(mut self, student_code: impl Into<String>) -> Self {
        self.entity.student_code = student_code.into();
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.entity.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.entity.last_name = last_name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.entity.email = email.into();
        self
    }

    pub fn status(mut self, status: StudentStatus) -> Self {
        self.entity.status = status;
        self
    }

    pub fn gpa(mut self, gpa: f64) -> Self {
        self.entity.gpa = gpa;
        self
    }

    /// Inserts the student entity into the database.
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            id: ActiveValue::NotSet,
            student_code: ActiveValue::Set(self.entity.student_code),
            first_name: ActiveValue::Set(self.entity.first_name),
            last_name: ActiveValue::Set(self.entity.last_name),
            email: ActiveValue::Set(self.entity.email),
            phone: ActiveValue::Set(self.entity.phone),
            birth_date: ActiveValue::Set(self.entity.birth_date),
            admission_date: ActiveValue::Set(self.entity.admission_date),
            status: ActiveValue::Set(self.entity.status),
            gpa: ActiveValue::Set(self.entity.gpa),
            credits_completed: ActiveValue::Set(self.entity.credits_completed),
            created_at: ActiveValue::Set(self.entity.created_at),
            updated_at: ActiveValue::Set(self.entity.updated_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with default values.
pub async fn create_student(db: &DatabaseConnection) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_student_with_unique_code() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Student)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_student(db).await?;
        let second = create_student(db).await?;

        assert_ne!(first.id, second.id);
        assert_ne!(first.student_code, second.student_code);
        assert_ne!(first.email, second.email);
        assert_eq!(first.status, StudentStatus::Active);

        Ok(())
    }

    #[tokio::test]
    async fn creates_student_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Student)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let student = StudentFactory::new(db)
            .first_name("Grace")
            .last_name("Hopper")
            .status(StudentStatus::Suspended)
            .build()
            .await?;

        assert_eq!(student.first_name, "Grace");
        assert_eq!(student.last_name, "Hopper");
        assert_eq!(student.status, StudentStatus::Suspended);

        Ok(())
    }
}

//! Student data repository for database operations.
//!
//! This module provides the `StudentRepository` for managing student records. It handles
//! creation, filtered queries, partial updates and deletion with conversion between entity
//! models and domain models at the infrastructure boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::student::{CreateStudentParams, Student, StudentSearchParams, UpdateStudentParams},
    util::search::contains_ignoring_case,
};

/// Repository providing database operations for students.
///
/// Works on a `DatabaseConnection` or inside a `DatabaseTransaction`.
pub struct StudentRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentRepository<'a, C> {
    /// Creates a new StudentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new student.
    ///
    /// GPA and completed credits start at zero. The admission date defaults to the
    /// current UTC date when the params carry none.
    ///
    /// # Returns
    /// - `Ok(Student)` - The created student
    /// - `Err(DbErr)` - Insert failed, including unique constraint violations
    pub async fn create(&self, params: CreateStudentParams) -> Result<Student, DbErr> {
        let now = Utc::now();

        let entity = entity::student::ActiveModel {
            student_code: ActiveValue::Set(params.student_code),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            birth_date: ActiveValue::Set(params.birth_date),
            admission_date: ActiveValue::Set(params.admission_date.unwrap_or(now.date_naive())),
            status: ActiveValue::Set(params.status.into()),
            gpa: ActiveValue::Set(0.0),
            credits_completed: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Student::from_entity(entity))
    }

    /// Gets every student ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Student>, DbErr> {
        let entities = entity::prelude::Student::find()
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Student::from_entity).collect())
    }

    /// Gets the students matching every present filter, ordered by ID.
    ///
    /// Status and GPA bounds (inclusive) are filtered in SQL. Name filters are substring
    /// matches ignoring case, applied to the rows afterwards so non-ASCII letters fold too.
    pub async fn search(&self, params: &StudentSearchParams) -> Result<Vec<Student>, DbErr> {
        let mut query = entity::prelude::Student::find();

        if let Some(status) = params.status {
            let status: entity::sea_orm_active_enums::StudentStatus = status.into();
            query = query.filter(entity::student::Column::Status.eq(status));
        }
        if let Some(gpa_min) = params.gpa_min {
            query = query.filter(entity::student::Column::Gpa.gte(gpa_min));
        }
        if let Some(gpa_max) = params.gpa_max {
            query = query.filter(entity::student::Column::Gpa.lte(gpa_max));
        }

        let entities = query
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .filter(|student| {
                let first_name = params.first_name.as_deref().unwrap_or_default();
                let last_name = params.last_name.as_deref().unwrap_or_default();
                contains_ignoring_case(&student.first_name, first_name)
                    && contains_ignoring_case(&student.last_name, last_name)
            })
            .map(Student::from_entity)
            .collect())
    }

    /// Gets a student by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Student>, DbErr> {
        let entity = entity::prelude::Student::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Student::from_entity))
    }

    /// Gets the students with the given IDs. Unknown IDs are skipped.
    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<Student>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Student::find()
            .filter(entity::student::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Student::from_entity).collect())
    }

    /// Checks whether a student already uses the given code.
    pub async fn code_exists(&self, student_code: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Student::find()
            .filter(entity::student::Column::StudentCode.eq(student_code))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Applies a partial update and refreshes `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Student)` - The updated student
    /// - `Err(DbErr::RecordNotFound)` - No student with the given ID
    /// - `Err(DbErr)` - Update failed, including unique constraint violations
    pub async fn update(&self, params: UpdateStudentParams) -> Result<Student, DbErr> {
        let student = entity::prelude::Student::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Student with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::student::ActiveModel = student.into();

        if let Some(student_code) = params.student_code {
            active_model.student_code = ActiveValue::Set(student_code);
        }
        if let Some(first_name) = params.first_name {
            active_model.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = params.last_name {
            active_model.last_name = ActiveValue::Set(last_name);
        }
        if let Some(email) = params.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(phone) = params.phone {
            active_model.phone = ActiveValue::Set(phone);
        }
        if let Some(birth_date) = params.birth_date {
            active_model.birth_date = ActiveValue::Set(birth_date);
        }
        if let Some(admission_date) = params.admission_date {
            active_model.admission_date = ActiveValue::Set(admission_date);
        }
        if let Some(status) = params.status {
            active_model.status = ActiveValue::Set(status.into());
        }
        if let Some(gpa) = params.gpa {
            active_model.gpa = ActiveValue::Set(gpa);
        }
        if let Some(credits_completed) = params.credits_completed {
            active_model.credits_completed = ActiveValue::Set(credits_completed);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Student::from_entity(entity))
    }

    /// Stores recomputed academic totals for a student.
    pub async fn set_academic_record(
        &self,
        id: i32,
        gpa: f64,
        credits_completed: i32,
    ) -> Result<Student, DbErr> {
        self.update(UpdateStudentParams {
            id,
            gpa: Some(gpa),
            credits_completed: Some(credits_completed),
            ..Default::default()
        })
        .await
    }

    /// Deletes a student. Enrollments are removed by the `ON DELETE CASCADE` foreign key.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted rows, `0` when the student did not exist
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Student::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every student with one of the given IDs.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted rows
    pub async fn delete_many(&self, ids: &[i32]) -> Result<u64, DbErr> {
        let result = entity::prelude::Student::delete_many()
            .filter(entity::student::Column::Id.is_in(ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod test;

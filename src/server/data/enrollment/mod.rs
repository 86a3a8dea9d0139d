//! Enrollment data repository for database operations.
//!
//! Enrollments reference a student and a course. Besides CRUD the repository provides the
//! batch lookups used to attach enrollments to lists of students or courses, and the
//! course join used to recompute a student's academic record.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    course::Course,
    enrollment::{CreateEnrollmentParams, Enrollment, UpdateEnrollmentParams},
};

/// Repository providing database operations for enrollments.
///
/// Works on a `DatabaseConnection` or inside a `DatabaseTransaction`.
pub struct EnrollmentRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EnrollmentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new enrollment dated today with a first attempt.
    ///
    /// # Returns
    /// - `Ok(Enrollment)` - The created enrollment
    /// - `Err(DbErr)` - Insert failed, including foreign key and unique pair violations
    pub async fn create(&self, params: CreateEnrollmentParams) -> Result<Enrollment, DbErr> {
        let entity = entity::enrollment::ActiveModel {
            student_id: ActiveValue::Set(params.student_id),
            course_id: ActiveValue::Set(params.course_id),
            grade: ActiveValue::Set(params.grade),
            enrolled_on: ActiveValue::Set(Utc::now().date_naive()),
            completed_on: ActiveValue::Set(None),
            status: ActiveValue::Set(params.status.into()),
            attempts: ActiveValue::Set(1),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Enrollment::from_entity(entity))
    }

    /// Gets every enrollment ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Enrollment>, DbErr> {
        let entities = entity::prelude::Enrollment::find()
            .order_by_asc(entity::enrollment::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Enrollment::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Enrollment>, DbErr> {
        let entity = entity::prelude::Enrollment::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Enrollment::from_entity))
    }

    /// Gets the enrollments of any of the given students, ordered by ID.
    pub async fn get_by_student_ids(&self, student_ids: &[i32]) -> Result<Vec<Enrollment>, DbErr> {
        if student_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::StudentId.is_in(student_ids.iter().copied()))
            .order_by_asc(entity::enrollment::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Enrollment::from_entity).collect())
    }

    /// Gets the enrollments in any of the given courses, ordered by ID.
    pub async fn get_by_course_ids(&self, course_ids: &[i32]) -> Result<Vec<Enrollment>, DbErr> {
        if course_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::CourseId.is_in(course_ids.iter().copied()))
            .order_by_asc(entity::enrollment::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Enrollment::from_entity).collect())
    }

    /// Gets a student's enrollments joined with their courses.
    ///
    /// Enrollments whose course row is missing are skipped.
    pub async fn get_by_student_with_course(
        &self,
        student_id: i32,
    ) -> Result<Vec<(Enrollment, Course)>, DbErr> {
        let rows = entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::StudentId.eq(student_id))
            .find_also_related(entity::prelude::Course)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(enrollment, course)| {
                course.map(|c| (Enrollment::from_entity(enrollment), Course::from_entity(c)))
            })
            .collect())
    }

    /// Checks whether the student is already enrolled in the course.
    pub async fn exists_for_pair(&self, student_id: i32, course_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::StudentId.eq(student_id))
            .filter(entity::enrollment::Column::CourseId.eq(course_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Counts enrollments referencing any of the given courses.
    pub async fn count_by_course_ids(&self, course_ids: &[i32]) -> Result<u64, DbErr> {
        if course_ids.is_empty() {
            return Ok(0);
        }

        entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::CourseId.is_in(course_ids.iter().copied()))
            .count(self.db)
            .await
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Enrollment)` - The updated enrollment
    /// - `Err(DbErr::RecordNotFound)` - No enrollment with the given ID
    pub async fn update(&self, params: UpdateEnrollmentParams) -> Result<Enrollment, DbErr> {
        let enrollment = entity::prelude::Enrollment::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Enrollment with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::enrollment::ActiveModel = enrollment.clone().into();

        if let Some(grade) = params.grade {
            active_model.grade = ActiveValue::Set(grade);
        }
        if let Some(enrolled_on) = params.enrolled_on {
            active_model.enrolled_on = ActiveValue::Set(enrolled_on);
        }
        if let Some(completed_on) = params.completed_on {
            active_model.completed_on = ActiveValue::Set(completed_on);
        }
        if let Some(status) = params.status {
            active_model.status = ActiveValue::Set(status.into());
        }
        if let Some(attempts) = params.attempts {
            active_model.attempts = ActiveValue::Set(attempts);
        }

        if !active_model.is_changed() {
            return Ok(Enrollment::from_entity(enrollment));
        }

        let entity = active_model.update(self.db).await?;

        Ok(Enrollment::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Enrollment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod test;

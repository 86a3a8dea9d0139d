//! Course data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::course::{Course, CourseSearchParams, CreateCourseParams, UpdateCourseParams},
    util::search::contains_ignoring_case,
};

/// Repository providing database operations for courses.
///
/// Works on a `DatabaseConnection` or inside a `DatabaseTransaction`.
pub struct CourseRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CourseRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new, active course.
    pub async fn create(&self, params: CreateCourseParams) -> Result<Course, DbErr> {
        let now = Utc::now();

        let entity = entity::course::ActiveModel {
            course_code: ActiveValue::Set(params.course_code),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            credits: ActiveValue::Set(params.credits),
            level: ActiveValue::Set(params.level.into()),
            prerequisites: ActiveValue::Set(params.prerequisites),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Course::from_entity(entity))
    }

    /// Gets every course ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Course>, DbErr> {
        let entities = entity::prelude::Course::find()
            .order_by_asc(entity::course::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Course::from_entity).collect())
    }

    /// Gets the courses matching every present filter, ordered by ID.
    ///
    /// Credit bounds are inclusive. The name filter is a substring match ignoring case,
    /// applied to the rows after the query so non-ASCII letters fold too.
    pub async fn search(&self, params: &CourseSearchParams) -> Result<Vec<Course>, DbErr> {
        let mut query = entity::prelude::Course::find();

        if let Some(level) = params.level {
            let level: entity::sea_orm_active_enums::CourseLevel = level.into();
            query = query.filter(entity::course::Column::Level.eq(level));
        }
        if let Some(credits_min) = params.credits_min {
            query = query.filter(entity::course::Column::Credits.gte(credits_min));
        }
        if let Some(credits_max) = params.credits_max {
            query = query.filter(entity::course::Column::Credits.lte(credits_max));
        }
        if let Some(active) = params.active {
            query = query.filter(entity::course::Column::Active.eq(active));
        }

        let entities = query
            .order_by_asc(entity::course::Column::Id)
            .all(self.db)
            .await?;

        let name = params.name.as_deref().unwrap_or_default();

        Ok(entities
            .into_iter()
            .filter(|course| contains_ignoring_case(&course.name, name))
            .map(Course::from_entity)
            .collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Course>, DbErr> {
        let entity = entity::prelude::Course::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Course::from_entity))
    }

    /// Gets the courses with the given IDs. Unknown IDs are skipped.
    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<Course>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Course::find()
            .filter(entity::course::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::course::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Course::from_entity).collect())
    }

    /// Checks whether a course already uses the given code.
    pub async fn code_exists(&self, course_code: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Course::find()
            .filter(entity::course::Column::CourseCode.eq(course_code))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Applies a partial update and refreshes `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Course)` - The updated course
    /// - `Err(DbErr::RecordNotFound)` - No course with the given ID
    pub async fn update(&self, params: UpdateCourseParams) -> Result<Course, DbErr> {
        let course = entity::prelude::Course::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Course with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::course::ActiveModel = course.into();

        if let Some(course_code) = params.course_code {
            active_model.course_code = ActiveValue::Set(course_code);
        }
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(credits) = params.credits {
            active_model.credits = ActiveValue::Set(credits);
        }
        if let Some(level) = params.level {
            active_model.level = ActiveValue::Set(level.into());
        }
        if let Some(prerequisites) = params.prerequisites {
            active_model.prerequisites = ActiveValue::Set(prerequisites);
        }
        if let Some(active) = params.active {
            active_model.active = ActiveValue::Set(active);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Course::from_entity(entity))
    }

    /// Deletes a course.
    ///
    /// Fails with a foreign key violation while enrollments reference the course.
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Course::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every course with one of the given IDs.
    pub async fn delete_many(&self, ids: &[i32]) -> Result<u64, DbErr> {
        let result = entity::prelude::Course::delete_many()
            .filter(entity::course::Column::Id.is_in(ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod test;

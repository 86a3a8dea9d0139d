//! Course factory for creating test course entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use entity::sea_orm_active_enums::CourseLevel;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test courses with customizable fields.
///
/// Defaults come from `fixture::course` with a unique `CRS-{n}` code per instance.
pub struct CourseFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::course::Model,
}

impl<'a> CourseFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::course::entity_builder()
            .course_code(format!("CRS-{}", id))
            .name(format!("Course {}", id))
            .build();

        Self { db, entity }
    }

    pub fn course_code(mut self, course_code: impl Into<String>) -> Self {
        self.entity.course_code = course_code.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn credits(mut self, credits: i32) -> Self {
        self.entity.credits = credits;
        self
    }

    pub fn level(mut self, level: CourseLevel) -> Self {
        self.entity.level = level;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.entity.active = active;
        self
    }

    /// Inserts the course entity into the database.
    pub async fn build(self) -> Result<entity::course::Model, DbErr> {
        entity::course::ActiveModel {
            id: ActiveValue::NotSet,
            course_code: ActiveValue::Set(self.entity.course_code),
            name: ActiveValue::Set(self.entity.name),
            description: ActiveValue::Set(self.entity.description),
            credits: ActiveValue::Set(self.entity.credits),
            level: ActiveValue::Set(self.entity.level),
            prerequisites: ActiveValue::Set(self.entity.prerequisites),
            active: ActiveValue::Set(self.entity.active),
            created_at: ActiveValue::Set(self.entity.created_at),
            updated_at: ActiveValue::Set(self.entity.updated_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a course with default values.
pub async fn create_course(db: &DatabaseConnection) -> Result<entity::course::Model, DbErr> {
    CourseFactory::new(db).build().await
}

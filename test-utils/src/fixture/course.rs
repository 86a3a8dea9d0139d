//! Course fixtures for creating in-memory test data.

use chrono::Utc;
use entity::{course, sea_orm_active_enums::CourseLevel};

/// Default test course code.
pub const DEFAULT_COURSE_CODE: &str = "CRS-0001";

/// Default test course name.
pub const DEFAULT_NAME: &str = "Introduction to Programming";

/// Default number of credits.
pub const DEFAULT_CREDITS: i32 = 3;

/// Creates a course entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - course_code: `"CRS-0001"`
/// - name: `"Introduction to Programming"`
/// - credits: `3`, level: `Basic`, active: `true`
pub fn entity() -> course::Model {
    entity_builder().build()
}

/// Creates a course entity builder for customization.
pub fn entity_builder() -> CourseEntityBuilder {
    CourseEntityBuilder::default()
}

/// Builder for customized course entity models.
pub struct CourseEntityBuilder {
    id: i32,
    course_code: String,
    name: String,
    description: Option<String>,
    credits: i32,
    level: CourseLevel,
    prerequisites: Option<String>,
    active: bool,
}

impl Default for CourseEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            course_code: DEFAULT_COURSE_CODE.to_string(),
            name: DEFAULT_NAME.to_string(),
            description: None,
            credits: DEFAULT_CREDITS,
            level: CourseLevel::Basic,
            prerequisites: None,
            active: true,
        }
    }
}

impl CourseEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn course_code(mut self, course_code: impl Into<String>) -> Self {
        self.course_code = course_code.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn credits(mut self, credits: i32) -> Self {
        self.credits = credits;
        self
    }

    pub fn level(mut self, level: CourseLevel) -> Self {
        self.level = level;
        self
    }

    pub fn prerequisites(mut self, prerequisites: Option<String>) -> Self {
        self.prerequisites = prerequisites;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds the course entity model.
    pub fn build(self) -> course::Model {
        let now = Utc::now();

        course::Model {
            id: self.id,
            course_code: self.course_code,
            name: self.name,
            description: self.description,
            credits: self.credits,
            level: self.level,
            prerequisites: self.prerequisites,
            active: self.active,
            created_at: now,
            updated_at: now,
        }
    }
}

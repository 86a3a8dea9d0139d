mod delete;
mod get_by_id;
mod search;

use super::*;
use crate::model::course::CourseLevel;
use entity::prelude::Course;
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};

fn create_params(course_code: &str) -> CreateCourseParams {
    CreateCourseParams {
        course_code: course_code.to_string(),
        name: "Discrete Mathematics".to_string(),
        description: None,
        credits: 4,
        level: CourseLevel::Intermediate,
        prerequisites: None,
    }
}

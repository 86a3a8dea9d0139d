use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[cfg(feature = "server")]
use utoipa::{IntoParams, ToSchema};

use crate::model::enrollment::EnrollmentDetailDto;

/// Difficulty level of a course.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "UPPERCASE")]
pub enum CourseLevel {
    #[default]
    Basic,
    Intermediate,
    Advanced,
    Expert,
}

impl CourseLevel {
    pub const ALL: [CourseLevel; 4] = [
        CourseLevel::Basic,
        CourseLevel::Intermediate,
        CourseLevel::Advanced,
        CourseLevel::Expert,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CourseLevel::Basic => "BASIC",
            CourseLevel::Intermediate => "INTERMEDIATE",
            CourseLevel::Advanced => "ADVANCED",
            CourseLevel::Expert => "EXPERT",
        }
    }
}

impl fmt::Display for CourseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CourseLevel {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == value)
            .ok_or_else(|| {
                let allowed: Vec<&str> = Self::ALL.iter().map(|l| l.as_str()).collect();
                format!("Invalid level. Must be one of: {}", allowed.join(", "))
            })
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CourseDto {
    pub id: i32,
    pub course_code: String,
    pub name: String,
    pub description: Option<String>,
    pub credits: i32,
    pub level: CourseLevel,
    pub prerequisites: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Course together with its enrollments, each carrying the enrolled student.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CourseDetailDto {
    #[serde(flatten)]
    pub course: CourseDto,
    pub enrollments: Vec<EnrollmentDetailDto>,
}

/// Request body for creating a course. `level` defaults to `BASIC`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateCourseDto {
    #[serde(default)]
    pub course_code: String,
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub credits: i32,
    pub level: Option<String>,
    pub prerequisites: Option<String>,
}

/// Request body for a partial course update. Absent fields are left unchanged.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdateCourseDto {
    pub course_code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub credits: Option<i32>,
    pub level: Option<String>,
    pub prerequisites: Option<String>,
    pub active: Option<bool>,
}

/// Query string of `GET /api/courses/search`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(IntoParams))]
#[cfg_attr(feature = "server", into_params(parameter_in = Query))]
pub struct CourseSearchDto {
    /// Case-insensitive substring of the course name
    pub name: Option<String>,
    /// Exact level
    pub level: Option<String>,
    /// Inclusive lower bound on credits
    pub credits_min: Option<i32>,
    /// Inclusive upper bound on credits
    pub credits_max: Option<i32>,
    pub active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_level() {
        assert_eq!("EXPERT".parse(), Ok(CourseLevel::Expert));
    }

    #[test]
    fn rejects_unknown_level_with_allowed_values() {
        let err = "MASTER".parse::<CourseLevel>().unwrap_err();

        assert_eq!(
            err,
            "Invalid level. Must be one of: BASIC, INTERMEDIATE, ADVANCED, EXPERT"
        );
    }
}

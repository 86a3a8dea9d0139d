use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::{api::nullable, course::CourseDto, student::StudentDto};

/// Outcome of a student's enrollment in a course.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "UPPERCASE")]
pub enum EnrollmentStatus {
    #[default]
    Enrolled,
    Passed,
    Failed,
    Withdrawn,
}

impl EnrollmentStatus {
    pub const ALL: [EnrollmentStatus; 4] = [
        EnrollmentStatus::Enrolled,
        EnrollmentStatus::Passed,
        EnrollmentStatus::Failed,
        EnrollmentStatus::Withdrawn,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EnrollmentStatus::Enrolled => "ENROLLED",
            EnrollmentStatus::Passed => "PASSED",
            EnrollmentStatus::Failed => "FAILED",
            EnrollmentStatus::Withdrawn => "WITHDRAWN",
        }
    }
}

impl fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnrollmentStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| {
                let allowed: Vec<&str> = Self::ALL.iter().map(|s| s.as_str()).collect();
                format!("Invalid status. Must be one of: {}", allowed.join(", "))
            })
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct EnrollmentDto {
    pub id: i32,
    pub student_id: i32,
    pub course_id: i32,
    pub grade: Option<f64>,
    pub enrolled_on: NaiveDate,
    pub completed_on: Option<NaiveDate>,
    pub status: EnrollmentStatus,
    pub attempts: i32,
}

/// Enrollment with whichever related records were loaded.
///
/// Nested under a student only `course` is set, nested under a course only `student` is
/// set, and the enrollment endpoints set both.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct EnrollmentDetailDto {
    #[serde(flatten)]
    pub enrollment: EnrollmentDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student: Option<StudentDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<CourseDto>,
}

/// Request body for enrolling a student. `status` defaults to `ENROLLED`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateEnrollmentDto {
    pub student_id: i32,
    pub course_id: i32,
    pub status: Option<String>,
    pub grade: Option<f64>,
}

/// Request body for a partial enrollment update. Absent fields are left unchanged.
///
/// A `null` grade and an empty `completed_on` clear those fields.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdateEnrollmentDto {
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    #[cfg_attr(feature = "server", schema(value_type = Option<f64>))]
    pub grade: Option<Option<f64>>,
    pub enrolled_on: Option<String>,
    pub completed_on: Option<String>,
    pub status: Option<String>,
    pub attempts: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unknown_status_with_allowed_values() {
        let err = "DROPPED".parse::<EnrollmentStatus>().unwrap_err();

        assert_eq!(
            err,
            "Invalid status. Must be one of: ENROLLED, PASSED, FAILED, WITHDRAWN"
        );
    }

    #[test]
    fn omits_unloaded_relations() {
        let detail = EnrollmentDetailDto {
            enrollment: EnrollmentDto {
                id: 1,
                student_id: 2,
                course_id: 3,
                grade: None,
                enrolled_on: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                completed_on: None,
                status: EnrollmentStatus::Enrolled,
                attempts: 1,
            },
            student: None,
            course: None,
        };

        let json = serde_json::to_value(&detail).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["status"], "ENROLLED");
        assert!(json.get("student").is_none());
        assert!(json.get("course").is_none());
    }

    #[test]
    fn null_grade_differs_from_absent_grade() {
        let cleared: UpdateEnrollmentDto = serde_json::from_str(r#"{"grade":null}"#).unwrap();
        let untouched: UpdateEnrollmentDto = serde_json::from_str(r#"{"attempts":2}"#).unwrap();
        let graded: UpdateEnrollmentDto = serde_json::from_str(r#"{"grade":71.5}"#).unwrap();

        assert_eq!(cleared.grade, Some(None));
        assert_eq!(untouched.grade, None);
        assert_eq!(graded.grade, Some(Some(71.5)));
    }

    #[test]
    fn serializes_cleared_grade_as_null() {
        let dto = UpdateEnrollmentDto {
            grade: Some(None),
            ..Default::default()
        };

        let json = serde_json::to_value(&dto).unwrap();

        assert!(json["grade"].is_null());
        assert!(json.as_object().unwrap().contains_key("grade"));
    }
}

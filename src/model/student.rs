use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[cfg(feature = "server")]
use utoipa::{IntoParams, ToSchema};

use crate::model::enrollment::EnrollmentDetailDto;

/// Enrollment state of a student within the institution.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "UPPERCASE")]
pub enum StudentStatus {
    #[default]
    Active,
    Inactive,
    Graduated,
    Suspended,
}

impl StudentStatus {
    pub const ALL: [StudentStatus; 4] = [
        StudentStatus::Active,
        StudentStatus::Inactive,
        StudentStatus::Graduated,
        StudentStatus::Suspended,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StudentStatus::Active => "ACTIVE",
            StudentStatus::Inactive => "INACTIVE",
            StudentStatus::Graduated => "GRADUATED",
            StudentStatus::Suspended => "SUSPENDED",
        }
    }
}

impl fmt::Display for StudentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the wire representation, failing with the message returned to API clients.
impl FromStr for StudentStatus {
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
pub struct StudentDto {
    pub id: i32,
    pub student_code: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub admission_date: NaiveDate,
    pub status: StudentStatus,
    pub gpa: f64,
    pub credits_completed: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Student together with its enrollments, each carrying the enrolled course.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct StudentDetailDto {
    #[serde(flatten)]
    pub student: StudentDto,
    pub enrollments: Vec<EnrollmentDetailDto>,
}

/// Request body for creating a student.
///
/// Dates accept `YYYY-MM-DD` or RFC 3339. `status` defaults to `ACTIVE`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateStudentDto {
    #[serde(default)]
    pub student_code: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    pub phone: Option<String>,
    pub birth_date: Option<String>,
    pub admission_date: Option<String>,
    pub status: Option<String>,
}

/// Request body for a partial student update. Absent fields are left unchanged.
///
/// An empty string clears `phone` and `birth_date`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdateStudentDto {
    pub student_code: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<String>,
    pub admission_date: Option<String>,
    pub status: Option<String>,
    pub gpa: Option<f64>,
    pub credits_completed: Option<i32>,
}

/// Query string of `GET /api/students/search`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(IntoParams))]
#[cfg_attr(feature = "server", into_params(parameter_in = Query))]
pub struct StudentSearchDto {
    /// Case-insensitive substring of the first name
    pub first_name: Option<String>,
    /// Case-insensitive substring of the last name
    pub last_name: Option<String>,
    /// Exact status
    pub status: Option<String>,
    /// Inclusive lower bound on GPA
    pub gpa_min: Option<f64>,
    /// Inclusive upper bound on GPA
    pub gpa_max: Option<f64>,
}

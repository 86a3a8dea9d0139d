//! Student domain models and parameters.
//!
//! Domain models are converted from entity models at the repository boundary and into
//! DTOs at the controller boundary. Parameter types are built from request DTOs and carry
//! already-validated values, so repositories never see raw request strings.

use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::StudentStatus as StudentStatusEntity;

use crate::{
    model::student::{
        CreateStudentDto, StudentDetailDto, StudentDto, StudentSearchDto, StudentStatus,
        UpdateStudentDto,
    },
    server::{
        error::AppError,
        model::enrollment::EnrollmentDetail,
        util::{
            parse::{parse_date, parse_date_update, parse_optional_date},
            validate::{non_blank, optional_text, optional_text_update, require_fields},
        },
    },
};

impl From<StudentStatusEntity> for StudentStatus {
    fn from(value: StudentStatusEntity) -> Self {
        match value {
            StudentStatusEntity::Active => StudentStatus::Active,
            StudentStatusEntity::Inactive => StudentStatus::Inactive,
            StudentStatusEntity::Graduated => StudentStatus::Graduated,
            StudentStatusEntity::Suspended => StudentStatus::Suspended,
        }
    }
}

impl From<StudentStatus> for StudentStatusEntity {
    fn from(value: StudentStatus) -> Self {
        match value {
            StudentStatus::Active => StudentStatusEntity::Active,
            StudentStatus::Inactive => StudentStatusEntity::Inactive,
            StudentStatus::Graduated => StudentStatusEntity::Graduated,
            StudentStatus::Suspended => StudentStatusEntity::Suspended,
        }
    }
}

/// Student record as stored in the database.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: i32,
    pub student_code: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub admission_date: NaiveDate,
    pub status: StudentStatus,
    /// Credit-weighted mean grade of graded courses.
    pub gpa: f64,
    pub credits_completed: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Student {
    /// Converts an entity model to a student domain model at the repository boundary.
    pub fn from_entity(entity: entity::student::Model) -> Self {
        Self {
            id: entity.id,
            student_code: entity.student_code,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            phone: entity.phone,
            birth_date: entity.birth_date,
            admission_date: entity.admission_date,
            status: entity.status.into(),
            gpa: entity.gpa,
            credits_completed: entity.credits_completed,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            id: self.id,
            student_code: self.student_code,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            birth_date: self.birth_date,
            admission_date: self.admission_date,
            status: self.status,
            gpa: self.gpa,
            credits_completed: self.credits_completed,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Student with its enrollments, each enrollment carrying its course.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentDetail {
    pub student: Student,
    pub enrollments: Vec<EnrollmentDetail>,
}

impl StudentDetail {
    pub fn into_dto(self) -> StudentDetailDto {
        StudentDetailDto {
            student: self.student.into_dto(),
            enrollments: self
                .enrollments
                .into_iter()
                .map(EnrollmentDetail::into_dto)
                .collect(),
        }
    }
}

/// Validated parameters for creating a student.
#[derive(Debug, Clone)]
pub struct CreateStudentParams {
    pub student_code: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    /// Defaults to the current date when absent.
    pub admission_date: Option<NaiveDate>,
    pub status: StudentStatus,
}

impl CreateStudentParams {
    /// Validates the request body.
    ///
    /// The status is checked first so an invalid status is reported even when other
    /// fields are also wrong.
    ///
    /// # Returns
    /// - `Ok(CreateStudentParams)` - Trimmed, typed values
    /// - `Err(AppError::BadRequest)` - Invalid status, missing required field or bad date
    pub fn from_dto(dto: CreateStudentDto) -> Result<Self, AppError> {
        let status = match dto.status.as_deref() {
            Some(status) => status.parse::<StudentStatus>().map_err(AppError::BadRequest)?,
            None => StudentStatus::default(),
        };

        require_fields(&[
            ("student_code", &dto.student_code),
            ("first_name", &dto.first_name),
            ("last_name", &dto.last_name),
            ("email", &dto.email),
        ])?;

        Ok(Self {
            student_code: dto.student_code.trim().to_string(),
            first_name: dto.first_name.trim().to_string(),
            last_name: dto.last_name.trim().to_string(),
            email: dto.email.trim().to_string(),
            phone: optional_text(dto.phone),
            birth_date: parse_optional_date("birth_date", dto.birth_date.as_deref())?,
            admission_date: parse_optional_date("admission_date", dto.admission_date.as_deref())?,
            status,
        })
    }
}

/// Validated parameters for a partial student update.
///
/// `None` leaves a column unchanged. For nullable columns `Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct UpdateStudentParams {
    pub id: i32,
    pub student_code: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<Option<String>>,
    pub birth_date: Option<Option<NaiveDate>>,
    pub admission_date: Option<NaiveDate>,
    pub status: Option<StudentStatus>,
    pub gpa: Option<f64>,
    pub credits_completed: Option<i32>,
}

impl UpdateStudentParams {
    pub fn from_dto(id: i32, dto: UpdateStudentDto) -> Result<Self, AppError> {
        let status = dto
            .status
            .as_deref()
            .map(str::parse::<StudentStatus>)
            .transpose()
            .map_err(AppError::BadRequest)?;

        if dto.gpa.is_some_and(|gpa| !(0.0..=100.0).contains(&gpa)) {
            return Err(AppError::BadRequest(
                "GPA must be between 0 and 100".to_string(),
            ));
        }
        if dto.credits_completed.is_some_and(|credits| credits < 0) {
            return Err(AppError::BadRequest(
                "Credits completed cannot be negative".to_string(),
            ));
        }

        Ok(Self {
            id,
            student_code: non_blank("student_code", dto.student_code)?,
            first_name: non_blank("first_name", dto.first_name)?,
            last_name: non_blank("last_name", dto.last_name)?,
            email: non_blank("email", dto.email)?,
            phone: optional_text_update(dto.phone),
            birth_date: parse_date_update("birth_date", dto.birth_date.as_deref())?,
            admission_date: dto
                .admission_date
                .as_deref()
                .map(|value| parse_date("admission_date", value))
                .transpose()?,
            status,
            gpa: dto.gpa,
            credits_completed: dto.credits_completed,
        })
    }
}

/// Filters for the student search. Every present filter must match.
#[derive(Debug, Clone, Default)]
pub struct StudentSearchParams {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub status: Option<StudentStatus>,
    pub gpa_min: Option<f64>,
    pub gpa_max: Option<f64>,
}

impl StudentSearchParams {
    pub fn from_dto(dto: StudentSearchDto) -> Result<Self, AppError> {
        let status = optional_text(dto.status)
            .as_deref()
            .map(str::parse::<StudentStatus>)
            .transpose()
            .map_err(AppError::BadRequest)?;

        Ok(Self {
            first_name: optional_text(dto.first_name),
            last_name: optional_text(dto.last_name),
            status,
            gpa_min: dto.gpa_min,
            gpa_max: dto.gpa_max,
        })
    }
}

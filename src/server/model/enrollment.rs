//! Enrollment domain models and parameters.

use chrono::NaiveDate;
use entity::sea_orm_active_enums::EnrollmentStatus as EnrollmentStatusEntity;

use crate::{
    model::enrollment::{
        CreateEnrollmentDto, EnrollmentDetailDto, EnrollmentDto, EnrollmentStatus,
        UpdateEnrollmentDto,
    },
    server::{
        error::AppError,
        model::{course::Course, student::Student},
        util::{
            parse::{parse_date, parse_date_update},
            validate::grade_in_range,
        },
    },
};

impl From<EnrollmentStatusEntity> for EnrollmentStatus {
    fn from(value: EnrollmentStatusEntity) -> Self {
        match value {
            EnrollmentStatusEntity::Enrolled => EnrollmentStatus::Enrolled,
            EnrollmentStatusEntity::Passed => EnrollmentStatus::Passed,
            EnrollmentStatusEntity::Failed => EnrollmentStatus::Failed,
            EnrollmentStatusEntity::Withdrawn => EnrollmentStatus::Withdrawn,
        }
    }
}

impl From<EnrollmentStatus> for EnrollmentStatusEntity {
    fn from(value: EnrollmentStatus) -> Self {
        match value {
            EnrollmentStatus::Enrolled => EnrollmentStatusEntity::Enrolled,
            EnrollmentStatus::Passed => EnrollmentStatusEntity::Passed,
            EnrollmentStatus::Failed => EnrollmentStatusEntity::Failed,
            EnrollmentStatus::Withdrawn => EnrollmentStatusEntity::Withdrawn,
        }
    }
}

fn parse_status(value: &str) -> Result<EnrollmentStatus, AppError> {
    value
        .parse::<EnrollmentStatus>()
        .map_err(AppError::BadRequest)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Enrollment {
    pub id: i32,
    pub student_id: i32,
    pub course_id: i32,
    pub grade: Option<f64>,
    pub enrolled_on: NaiveDate,
    pub completed_on: Option<NaiveDate>,
    pub status: EnrollmentStatus,
    pub attempts: i32,
}

impl Enrollment {
    pub fn from_entity(entity: entity::enrollment::Model) -> Self {
        Self {
            id: entity.id,
            student_id: entity.student_id,
            course_id: entity.course_id,
            grade: entity.grade,
            enrolled_on: entity.enrolled_on,
            completed_on: entity.completed_on,
            status: entity.status.into(),
            attempts: entity.attempts,
        }
    }

    pub fn into_dto(self) -> EnrollmentDto {
        EnrollmentDto {
            id: self.id,
            student_id: self.student_id,
            course_id: self.course_id,
            grade: self.grade,
            enrolled_on: self.enrolled_on,
            completed_on: self.completed_on,
            status: self.status,
            attempts: self.attempts,
        }
    }
}

/// Enrollment with the related records the caller asked for.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrollmentDetail {
    pub enrollment: Enrollment,
    pub student: Option<Student>,
    pub course: Option<Course>,
}

impl EnrollmentDetail {
    pub fn into_dto(self) -> EnrollmentDetailDto {
        EnrollmentDetailDto {
            enrollment: self.enrollment.into_dto(),
            student: self.student.map(Student::into_dto),
            course: self.course.map(Course::into_dto),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateEnrollmentParams {
    pub student_id: i32,
    pub course_id: i32,
    pub status: EnrollmentStatus,
    pub grade: Option<f64>,
}

impl CreateEnrollmentParams {
    pub fn from_dto(dto: CreateEnrollmentDto) -> Result<Self, AppError> {
        let status = match dto.status.as_deref() {
            Some(status) => parse_status(status)?,
            None => EnrollmentStatus::default(),
        };

        Ok(Self {
            student_id: dto.student_id,
            course_id: dto.course_id,
            status,
            grade: grade_in_range(dto.grade)?,
        })
    }
}

/// Partial enrollment update. `grade` and `completed_on` are cleared with `Some(None)`.
#[derive(Debug, Clone, Default)]
pub struct UpdateEnrollmentParams {
    pub id: i32,
    pub grade: Option<Option<f64>>,
    pub enrolled_on: Option<NaiveDate>,
    pub completed_on: Option<Option<NaiveDate>>,
    pub status: Option<EnrollmentStatus>,
    pub attempts: Option<i32>,
}

impl UpdateEnrollmentParams {
    pub fn from_dto(id: i32, dto: UpdateEnrollmentDto) -> Result<Self, AppError> {
        let status = dto.status.as_deref().map(parse_status).transpose()?;

        if dto.attempts.is_some_and(|attempts| attempts < 1) {
            return Err(AppError::BadRequest(
                "Attempts must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            id,
            grade: dto.grade.map(grade_in_range).transpose()?,
            enrolled_on: dto
                .enrolled_on
                .as_deref()
                .map(|value| parse_date("enrolled_on", value))
                .transpose()?,
            completed_on: parse_date_update("completed_on", dto.completed_on.as_deref())?,
            status,
            attempts: dto.attempts,
        })
    }
}

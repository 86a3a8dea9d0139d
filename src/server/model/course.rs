//! Course domain models and parameters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::CourseLevel as CourseLevelEntity;

use crate::{
    model::course::{
        CourseDetailDto, CourseDto, CourseLevel, CourseSearchDto, CreateCourseDto,
        UpdateCourseDto,
    },
    server::{
        error::AppError,
        model::enrollment::EnrollmentDetail,
        util::validate::{non_blank, optional_text, optional_text_update, require_fields},
    },
};

impl From<CourseLevelEntity> for CourseLevel {
    fn from(value: CourseLevelEntity) -> Self {
        match value {
            CourseLevelEntity::Basic => CourseLevel::Basic,
            CourseLevelEntity::Intermediate => CourseLevel::Intermediate,
            CourseLevelEntity::Advanced => CourseLevel::Advanced,
            CourseLevelEntity::Expert => CourseLevel::Expert,
        }
    }
}

impl From<CourseLevel> for CourseLevelEntity {
    fn from(value: CourseLevel) -> Self {
        match value {
            CourseLevel::Basic => CourseLevelEntity::Basic,
            CourseLevel::Intermediate => CourseLevelEntity::Intermediate,
            CourseLevel::Advanced => CourseLevelEntity::Advanced,
            CourseLevel::Expert => CourseLevelEntity::Expert,
        }
    }
}

fn parse_level(value: &str) -> Result<CourseLevel, AppError> {
    value.parse::<CourseLevel>().map_err(AppError::BadRequest)
}

fn check_credits(credits: i32) -> Result<i32, AppError> {
    if credits > 0 {
        Ok(credits)
    } else {
        Err(AppError::BadRequest(
            "Credits must be greater than 0".to_string(),
        ))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
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

impl Course {
    pub fn from_entity(entity: entity::course::Model) -> Self {
        Self {
            id: entity.id,
            course_code: entity.course_code,
            name: entity.name,
            description: entity.description,
            credits: entity.credits,
            level: entity.level.into(),
            prerequisites: entity.prerequisites,
            active: entity.active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> CourseDto {
        CourseDto {
            id: self.id,
            course_code: self.course_code,
            name: self.name,
            description: self.description,
            credits: self.credits,
            level: self.level,
            prerequisites: self.prerequisites,
            active: self.active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Course with its enrollments, each enrollment carrying its student.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseDetail {
    pub course: Course,
    pub enrollments: Vec<EnrollmentDetail>,
}

impl CourseDetail {
    pub fn into_dto(self) -> CourseDetailDto {
        CourseDetailDto {
            course: self.course.into_dto(),
            enrollments: self
                .enrollments
                .into_iter()
                .map(EnrollmentDetail::into_dto)
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCourseParams {
    pub course_code: String,
    pub name: String,
    pub description: Option<String>,
    pub credits: i32,
    pub level: CourseLevel,
    pub prerequisites: Option<String>,
}

impl CreateCourseParams {
    /// Validates the request body, checking the level first.
    pub fn from_dto(dto: CreateCourseDto) -> Result<Self, AppError> {
        let level = match dto.level.as_deref() {
            Some(level) => parse_level(level)?,
            None => CourseLevel::default(),
        };

        require_fields(&[("course_code", &dto.course_code), ("name", &dto.name)])?;

        Ok(Self {
            course_code: dto.course_code.trim().to_string(),
            name: dto.name.trim().to_string(),
            description: optional_text(dto.description),
            credits: check_credits(dto.credits)?,
            level,
            prerequisites: optional_text(dto.prerequisites),
        })
    }
}

/// Partial course update. Nullable text columns are cleared with `Some(None)`.
#[derive(Debug, Clone, Default)]
pub struct UpdateCourseParams {
    pub id: i32,
    pub course_code: Option<String>,
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub credits: Option<i32>,
    pub level: Option<CourseLevel>,
    pub prerequisites: Option<Option<String>>,
    pub active: Option<bool>,
}

impl UpdateCourseParams {
    pub fn from_dto(id: i32, dto: UpdateCourseDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            level: dto.level.as_deref().map(parse_level).transpose()?,
            course_code: non_blank("course_code", dto.course_code)?,
            name: non_blank("name", dto.name)?,
            description: optional_text_update(dto.description),
            credits: dto.credits.map(check_credits).transpose()?,
            prerequisites: optional_text_update(dto.prerequisites),
            active: dto.active,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct CourseSearchParams {
    pub name: Option<String>,
    pub level: Option<CourseLevel>,
    pub credits_min: Option<i32>,
    pub credits_max: Option<i32>,
    pub active: Option<bool>,
}

impl CourseSearchParams {
    pub fn from_dto(dto: CourseSearchDto) -> Result<Self, AppError> {
        Ok(Self {
            name: optional_text(dto.name),
            level: optional_text(dto.level)
                .as_deref()
                .map(parse_level)
                .transpose()?,
            credits_min: dto.credits_min,
            credits_max: dto.credits_max,
            active: dto.active,
        })
    }
}

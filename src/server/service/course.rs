use std::collections::HashMap;

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        course::CourseRepository, enrollment::EnrollmentRepository, student::StudentRepository,
    },
    error::AppError,
    model::{
        course::{Course, CourseDetail, CourseSearchParams, CreateCourseParams, UpdateCourseParams},
        enrollment::EnrollmentDetail,
    },
    service::academic_record::AcademicRecordService,
};

pub struct CourseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new course after checking that the code is unused
    pub async fn create(&self, params: CreateCourseParams) -> Result<Course, AppError> {
        let repo = CourseRepository::new(self.db);

        if repo.code_exists(&params.course_code).await? {
            return Err(AppError::BadRequest(
                "A course with this code already exists".to_string(),
            ));
        }

        let course = repo.create(params).await?;

        tracing::info!("Created course {} ({})", course.id, course.course_code);

        Ok(course)
    }

    /// Gets every course with its enrollments and enrolled students
    pub async fn get_all(&self) -> Result<Vec<CourseDetail>, AppError> {
        let courses = CourseRepository::new(self.db).get_all().await?;

        self.with_enrollments(courses).await
    }

    pub async fn search(&self, params: CourseSearchParams) -> Result<Vec<CourseDetail>, AppError> {
        let courses = CourseRepository::new(self.db).search(&params).await?;

        self.with_enrollments(courses).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<CourseDetail>, AppError> {
        let Some(course) = CourseRepository::new(self.db).get_by_id(id).await? else {
            return Ok(None);
        };

        let mut details = self.with_enrollments(vec![course]).await?;

        Ok(details.pop())
    }

    /// Updates a course
    /// Returns None if the course doesn't exist
    ///
    /// A credit change refreshes the academic record of every enrolled student in the
    /// same transaction.
    pub async fn update(&self, params: UpdateCourseParams) -> Result<Option<Course>, AppError> {
        let txn = self.db.begin().await?;
        let repo = CourseRepository::new(&txn);

        let Some(current) = repo.get_by_id(params.id).await? else {
            return Ok(None);
        };

        let course = repo.update(params).await?;

        if course.credits != current.credits {
            let mut student_ids: Vec<i32> = EnrollmentRepository::new(&txn)
                .get_by_course_ids(&[course.id])
                .await?
                .into_iter()
                .map(|e| e.student_id)
                .collect();
            student_ids.sort_unstable();
            student_ids.dedup();

            AcademicRecordService::new(&txn)
                .recompute_many(&student_ids)
                .await?;

            tracing::info!(
                "Refreshed academic records of {} students after credit change on course {}",
                student_ids.len(),
                course.id
            );
        }

        txn.commit().await?;

        Ok(Some(course))
    }

    /// Deletes a course that has no enrollments
    /// Returns false if the course doesn't exist
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = CourseRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Ok(false);
        }

        if EnrollmentRepository::new(self.db)
            .count_by_course_ids(&[id])
            .await?
            > 0
        {
            return Err(AppError::BadRequest(
                "The course cannot be deleted because it has enrolled students".to_string(),
            ));
        }

        let deleted = repo.delete(id).await?;

        tracing::info!("Deleted course {}", id);

        Ok(deleted > 0)
    }

    /// Deletes every listed course unless any of them has enrollments
    pub async fn delete_many(&self, ids: &[i32]) -> Result<u64, AppError> {
        if ids.is_empty() {
            return Err(AppError::BadRequest(
                "A non-empty array of IDs is required".to_string(),
            ));
        }

        if EnrollmentRepository::new(self.db)
            .count_by_course_ids(ids)
            .await?
            > 0
        {
            return Err(AppError::BadRequest(
                "The courses cannot be deleted because they have enrolled students".to_string(),
            ));
        }

        let deleted = CourseRepository::new(self.db).delete_many(ids).await?;

        tracing::info!("Deleted {} courses", deleted);

        Ok(deleted)
    }

    /// Attaches enrollments and their students to each course, preserving course order
    async fn with_enrollments(&self, courses: Vec<Course>) -> Result<Vec<CourseDetail>, AppError> {
        let course_ids: Vec<i32> = courses.iter().map(|c| c.id).collect();

        let enrollments = EnrollmentRepository::new(self.db)
            .get_by_course_ids(&course_ids)
            .await?;

        let mut student_ids: Vec<i32> = enrollments.iter().map(|e| e.student_id).collect();
        student_ids.sort_unstable();
        student_ids.dedup();

        let students: HashMap<i32, _> = StudentRepository::new(self.db)
            .get_by_ids(&student_ids)
            .await?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();

        let mut by_course: HashMap<i32, Vec<EnrollmentDetail>> = HashMap::new();
        for enrollment in enrollments {
            let student = students.get(&enrollment.student_id).cloned();
            by_course
                .entry(enrollment.course_id)
                .or_default()
                .push(EnrollmentDetail {
                    enrollment,
                    student,
                    course: None,
                });
        }

        Ok(courses
            .into_iter()
            .map(|course| CourseDetail {
                enrollments: by_course.remove(&course.id).unwrap_or_default(),
                course,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::course::CourseLevel;
    use test_utils::{builder::TestBuilder, factory};

    /// Tests that a reused course code is rejected.
    ///
    /// Expected: Err(AppError::BadRequest) with the duplicate code message
    #[tokio::test]
    async fn rejects_duplicate_code() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_registrar_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let existing = factory::create_course(db).await?;

        let result = CourseService::new(db)
            .create(CreateCourseParams {
                course_code: existing.course_code,
                name: "Compilers".to_string(),
                description: None,
                credits: 4,
                level: CourseLevel::Advanced,
                prerequisites: None,
            })
            .await;

        assert!(matches!(
            result,
            Err(AppError::BadRequest(msg)) if msg == "A course with this code already exists"
        ));

        Ok(())
    }

    /// Tests that a course detail carries enrolled students.
    ///
    /// Expected: Ok(Some) with one enrollment holding its student
    #[tokio::test]
    async fn detail_includes_enrolled_students() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_registrar_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (student, course, _) = factory::helpers::create_enrollment_with_dependencies(db).await?;

        let detail = CourseService::new(db).get_by_id(course.id).await?.unwrap();

        assert_eq!(detail.enrollments.len(), 1);
        let enrollment = &detail.enrollments[0];
        assert_eq!(enrollment.student.as_ref().map(|s| s.id), Some(student.id));
        assert!(enrollment.course.is_none());

        Ok(())
    }

    /// Tests that a course with enrollments cannot be deleted.
    ///
    /// Expected: Err(AppError::BadRequest) and the course still exists
    #[tokio::test]
    async fn refuses_to_delete_course_with_enrollments() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_registrar_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, course, _) = factory::helpers::create_enrollment_with_dependencies(db).await?;
        let service = CourseService::new(db);

        let result = service.delete(course.id).await;
        assert!(matches!(
            result,
            Err(AppError::BadRequest(msg))
                if msg == "The course cannot be deleted because it has enrolled students"
        ));

        let result = service.delete_many(&[course.id]).await;
        assert!(matches!(
            result,
            Err(AppError::BadRequest(msg))
                if msg == "The courses cannot be deleted because they have enrolled students"
        ));

        assert!(service.get_by_id(course.id).await?.is_some());

        Ok(())
    }

    /// Tests deleting courses without enrollments.
    ///
    /// Expected: Ok(true) for an existing course, Ok(false) for a missing one
    #[tokio::test]
    async fn deletes_course_without_enrollments() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_registrar_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let course = factory::create_course(db).await?;
        let service = CourseService::new(db);

        assert!(service.delete(course.id).await?);
        assert!(!service.delete(course.id).await?);

        Ok(())
    }

    /// Tests that changing course credits refreshes enrolled students' records.
    ///
    /// Expected: GPA and completed credits reweighted with the new credits
    #[tokio::test]
    async fn credit_change_refreshes_academic_records() -> Result<(), AppError> {
        use entity::sea_orm_active_enums::EnrollmentStatus as EnrollmentStatusEntity;

        let test = TestBuilder::new()
            .with_registrar_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let student = factory::create_student(db).await?;
        let major = factory::course::CourseFactory::new(db).credits(4).build().await?;
        let minor = factory::course::CourseFactory::new(db).credits(1).build().await?;
        for (course_id, grade) in [(major.id, 90.0), (minor.id, 40.0)] {
            factory::enrollment::EnrollmentFactory::new(db, student.id, course_id)
                .status(EnrollmentStatusEntity::Passed)
                .grade(Some(grade))
                .build()
                .await?;
        }
        AcademicRecordService::new(db).recompute(student.id).await?;

        let updated = CourseService::new(db)
            .update(UpdateCourseParams {
                id: minor.id,
                credits: Some(4),
                ..Default::default()
            })
            .await?;
        assert_eq!(updated.map(|c| c.credits), Some(4));

        let student = StudentRepository::new(db)
            .get_by_id(student.id)
            .await?
            .unwrap();
        // (90 * 4 + 40 * 4) / 8
        assert_eq!(student.gpa, 65.0);
        assert_eq!(student.credits_completed, 8);

        Ok(())
    }

    /// Tests updating a course that does not exist.
    ///
    /// Expected: Ok(None)
    #[tokio::test]
    async fn update_reports_missing_course() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_registrar_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let updated = CourseService::new(db)
            .update(UpdateCourseParams {
                id: 12,
                credits: Some(2),
                ..Default::default()
            })
            .await?;

        assert!(updated.is_none());

        Ok(())
    }
}

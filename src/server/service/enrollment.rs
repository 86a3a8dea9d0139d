//! Enrollment business logic.
//!
//! Every mutation refreshes the affected student's GPA and completed credits through
//! [`AcademicRecordService`] in the same transaction as the enrollment write.

use std::collections::HashMap;

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        course::CourseRepository, enrollment::EnrollmentRepository, student::StudentRepository,
    },
    error::AppError,
    model::enrollment::{
        CreateEnrollmentParams, Enrollment, EnrollmentDetail, UpdateEnrollmentParams,
    },
    service::academic_record::AcademicRecordService,
};

pub struct EnrollmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EnrollmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Enrolls a student in a course.
    ///
    /// # Returns
    /// - `Ok(EnrollmentDetail)` - The new enrollment with its student and course
    /// - `Err(AppError::BadRequest)` - Unknown student or course, or the student is already
    ///   enrolled in the course
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateEnrollmentParams) -> Result<EnrollmentDetail, AppError> {
        if StudentRepository::new(self.db)
            .get_by_id(params.student_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest("Student not found".to_string()));
        }
        let Some(course) = CourseRepository::new(self.db)
            .get_by_id(params.course_id)
            .await?
        else {
            return Err(AppError::BadRequest("Course not found".to_string()));
        };

        if EnrollmentRepository::new(self.db)
            .exists_for_pair(params.student_id, params.course_id)
            .await?
        {
            return Err(AppError::BadRequest(
                "This student is already enrolled in this course".to_string(),
            ));
        }

        let txn = self.db.begin().await?;
        let enrollment = EnrollmentRepository::new(&txn).create(params).await?;
        let student = AcademicRecordService::new(&txn)
            .recompute(enrollment.student_id)
            .await?;
        txn.commit().await?;

        tracing::info!(
            "Enrolled student {} in course {}",
            enrollment.student_id,
            enrollment.course_id
        );

        Ok(EnrollmentDetail {
            enrollment,
            student: Some(student),
            course: Some(course),
        })
    }

    /// Gets every enrollment with its student and course
    pub async fn get_all(&self) -> Result<Vec<EnrollmentDetail>, AppError> {
        let enrollments = EnrollmentRepository::new(self.db).get_all().await?;

        self.with_relations(enrollments).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<EnrollmentDetail>, AppError> {
        let Some(enrollment) = EnrollmentRepository::new(self.db).get_by_id(id).await? else {
            return Ok(None);
        };

        let mut details = self.with_relations(vec![enrollment]).await?;

        Ok(details.pop())
    }

    /// Updates an enrollment and refreshes the student's academic record
    /// Returns None if the enrollment doesn't exist
    pub async fn update(
        &self,
        params: UpdateEnrollmentParams,
    ) -> Result<Option<Enrollment>, AppError> {
        let txn = self.db.begin().await?;
        let repo = EnrollmentRepository::new(&txn);

        if repo.get_by_id(params.id).await?.is_none() {
            return Ok(None);
        }

        let enrollment = repo.update(params).await?;
        AcademicRecordService::new(&txn)
            .recompute(enrollment.student_id)
            .await?;
        txn.commit().await?;

        Ok(Some(enrollment))
    }

    /// Deletes an enrollment and refreshes the student's academic record
    /// Returns false if the enrollment doesn't exist
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;
        let repo = EnrollmentRepository::new(&txn);

        let Some(enrollment) = repo.get_by_id(id).await? else {
            return Ok(false);
        };

        let deleted = repo.delete(id).await?;
        AcademicRecordService::new(&txn)
            .recompute(enrollment.student_id)
            .await?;
        txn.commit().await?;

        tracing::info!("Deleted enrollment {}", id);

        Ok(deleted > 0)
    }

    async fn with_relations(
        &self,
        enrollments: Vec<Enrollment>,
    ) -> Result<Vec<EnrollmentDetail>, AppError> {
        let mut student_ids: Vec<i32> = enrollments.iter().map(|e| e.student_id).collect();
        student_ids.sort_unstable();
        student_ids.dedup();
        let mut course_ids: Vec<i32> = enrollments.iter().map(|e| e.course_id).collect();
        course_ids.sort_unstable();
        course_ids.dedup();

        let students: HashMap<i32, _> = StudentRepository::new(self.db)
            .get_by_ids(&student_ids)
            .await?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();
        let courses: HashMap<i32, _> = CourseRepository::new(self.db)
            .get_by_ids(&course_ids)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        Ok(enrollments
            .into_iter()
            .map(|enrollment| EnrollmentDetail {
                student: students.get(&enrollment.student_id).cloned(),
                course: courses.get(&enrollment.course_id).cloned(),
                enrollment,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::enrollment::EnrollmentStatus;
    use test_utils::{builder::TestBuilder, factory};

    fn create_params(student_id: i32, course_id: i32) -> CreateEnrollmentParams {
        CreateEnrollmentParams {
            student_id,
            course_id,
            status: EnrollmentStatus::Enrolled,
            grade: None,
        }
    }

    /// Tests enrolling a student in a course.
    ///
    /// Expected: Ok with the student and course attached
    #[tokio::test]
    async fn creates_enrollment_with_relations() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_registrar_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let student = factory::create_student(db).await?;
        let course = factory::create_course(db).await?;

        let detail = EnrollmentService::new(db)
            .create(create_params(student.id, course.id))
            .await?;

        assert_eq!(detail.enrollment.attempts, 1);
        assert_eq!(detail.enrollment.status, EnrollmentStatus::Enrolled);
        assert_eq!(detail.student.map(|s| s.id), Some(student.id));
        assert_eq!(detail.course.map(|c| c.id), Some(course.id));

        Ok(())
    }

    /// Tests the checks performed before inserting an enrollment.
    ///
    /// Expected: Err(AppError::BadRequest) for an unknown student, an unknown course and a
    /// repeated student/course pair
    #[tokio::test]
    async fn rejects_invalid_enrollments() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_registrar_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (student, course, _) = factory::helpers::create_enrollment_with_dependencies(db).await?;
        let service = EnrollmentService::new(db);

        let result = service.create(create_params(999, course.id)).await;
        assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "Student not found"));

        let result = service.create(create_params(student.id, 999)).await;
        assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "Course not found"));

        let result = service.create(create_params(student.id, course.id)).await;
        assert!(matches!(
            result,
            Err(AppError::BadRequest(msg)) if msg == "This student is already enrolled in this course"
        ));

        Ok(())
    }

    /// Tests that grading and removing enrollments keeps the student's record current.
    ///
    /// Expected: GPA and credits follow the passed enrollment, then reset after deletion
    #[tokio::test]
    async fn mutations_refresh_academic_record() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_registrar_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let student = factory::create_student(db).await?;
        let course = factory::course::CourseFactory::new(db)
            .credits(4)
            .build()
            .await?;
        let service = EnrollmentService::new(db);

        let detail = service.create(create_params(student.id, course.id)).await?;
        let enrollment_id = detail.enrollment.id;

        service
            .update(UpdateEnrollmentParams {
                id: enrollment_id,
                grade: Some(Some(82.5)),
                status: Some(EnrollmentStatus::Passed),
                ..Default::default()
            })
            .await?;

        let graded = StudentRepository::new(db).get_by_id(student.id).await?.unwrap();
        assert_eq!(graded.gpa, 82.5);
        assert_eq!(graded.credits_completed, 4);

        assert!(service.delete(enrollment_id).await?);

        let reset = StudentRepository::new(db).get_by_id(student.id).await?.unwrap();
        assert_eq!(reset.gpa, 0.0);
        assert_eq!(reset.credits_completed, 0);

        Ok(())
    }

    /// Tests lookups of a missing enrollment.
    ///
    /// Expected: Ok(None) from get and update, Ok(false) from delete
    #[tokio::test]
    async fn reports_missing_enrollment() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_registrar_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = EnrollmentService::new(db);

        assert!(service.get_by_id(3).await?.is_none());
        assert!(service
            .update(UpdateEnrollmentParams {
                id: 3,
                ..Default::default()
            })
            .await?
            .is_none());
        assert!(!service.delete(3).await?);

        Ok(())
    }
}

//! Recomputation of a student's GPA and completed credits from their enrollments.

use sea_orm::{ConnectionTrait, DbErr};

use crate::{
    model::enrollment::EnrollmentStatus,
    server::{
        data::{enrollment::EnrollmentRepository, student::StudentRepository},
        error::AppError,
        model::{course::Course, enrollment::Enrollment, student::Student},
    },
};

/// Academic totals derived from a student's enrollments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AcademicRecord {
    pub gpa: f64,
    pub credits_completed: i32,
}

impl AcademicRecord {
    /// Computes the record from enrollments joined with their courses.
    ///
    /// GPA is the credit-weighted mean grade of graded `PASSED` or `FAILED` enrollments,
    /// rounded to two decimals, or `0.0` when there are none. Completed credits sum the
    /// credits of `PASSED` enrollments.
    pub fn compute(enrollments: &[(Enrollment, Course)]) -> Self {
        let mut weighted_sum = 0.0;
        let mut weight = 0i64;
        let mut credits_completed = 0;

        for (enrollment, course) in enrollments {
            let finished = matches!(
                enrollment.status,
                EnrollmentStatus::Passed | EnrollmentStatus::Failed
            );

            if let (true, Some(grade)) = (finished, enrollment.grade) {
                weighted_sum += grade * f64::from(course.credits);
                weight += i64::from(course.credits);
            }
            if enrollment.status == EnrollmentStatus::Passed {
                credits_completed += course.credits;
            }
        }

        let gpa = if weight > 0 {
            (weighted_sum / weight as f64 * 100.0).round() / 100.0
        } else {
            0.0
        };

        Self {
            gpa,
            credits_completed,
        }
    }
}

/// Stores recomputed academic records.
///
/// Takes the connection or transaction the triggering write runs on, so the totals are
/// committed together with that write.
pub struct AcademicRecordService<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AcademicRecordService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Recomputes and stores the academic record of a student.
    ///
    /// # Returns
    /// - `Ok(Student)` - The student with refreshed `gpa` and `credits_completed`
    /// - `Err(AppError::InternalError)` - The student row no longer exists
    /// - `Err(AppError::DbErr)` - Query failed
    pub async fn recompute(&self, student_id: i32) -> Result<Student, AppError> {
        let enrollments = EnrollmentRepository::new(self.db)
            .get_by_student_with_course(student_id)
            .await?;

        let record = AcademicRecord::compute(&enrollments);

        StudentRepository::new(self.db)
            .set_academic_record(student_id, record.gpa, record.credits_completed)
            .await
            .map_err(|err| match err {
                DbErr::RecordNotFound(_) => AppError::InternalError(format!(
                    "Student {} missing while storing academic record",
                    student_id
                )),
                err => err.into(),
            })
    }

    /// Recomputes the academic record of every listed student.
    pub async fn recompute_many(&self, student_ids: &[i32]) -> Result<(), AppError> {
        for &student_id in student_ids {
            self.recompute(student_id).await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    use crate::model::course::CourseLevel;

    fn row(status: EnrollmentStatus, grade: Option<f64>, credits: i32) -> (Enrollment, Course) {
        let now = Utc::now();
        (
            Enrollment {
                id: 1,
                student_id: 1,
                course_id: 1,
                grade,
                enrolled_on: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                completed_on: None,
                status,
                attempts: 1,
            },
            Course {
                id: 1,
                course_code: "C".to_string(),
                name: "C".to_string(),
                description: None,
                credits,
                level: CourseLevel::Basic,
                prerequisites: None,
                active: true,
                created_at: now,
                updated_at: now,
            },
        )
    }

    #[test]
    fn empty_record_is_zero() {
        let record = AcademicRecord::compute(&[]);

        assert_eq!(record.gpa, 0.0);
        assert_eq!(record.credits_completed, 0);
    }

    #[test]
    fn weights_grades_by_credits() {
        let record = AcademicRecord::compute(&[
            row(EnrollmentStatus::Passed, Some(90.0), 4),
            row(EnrollmentStatus::Failed, Some(40.0), 1),
        ]);

        // (90 * 4 + 40 * 1) / 5
        assert_eq!(record.gpa, 80.0);
        assert_eq!(record.credits_completed, 4);
    }

    #[test]
    fn ignores_ungraded_and_unfinished_enrollments() {
        let record = AcademicRecord::compute(&[
            row(EnrollmentStatus::Passed, Some(70.0), 3),
            row(EnrollmentStatus::Enrolled, Some(100.0), 3),
            row(EnrollmentStatus::Withdrawn, Some(10.0), 3),
            row(EnrollmentStatus::Passed, None, 2),
        ]);

        assert_eq!(record.gpa, 70.0);
        assert_eq!(record.credits_completed, 5);
    }

    #[test]
    fn rounds_to_two_decimals() {
        let record = AcademicRecord::compute(&[
            row(EnrollmentStatus::Passed, Some(85.0), 1),
            row(EnrollmentStatus::Passed, Some(90.0), 1),
            row(EnrollmentStatus::Passed, Some(91.0), 1),
        ]);

        assert_eq!(record.gpa, 88.67);
    }

    #[tokio::test]
    async fn recompute_stores_record_on_student() -> Result<(), sea_orm::DbErr> {
        use entity::sea_orm_active_enums::EnrollmentStatus as EnrollmentStatusEntity;
        use test_utils::{builder::TestBuilder, factory};

        let test = TestBuilder::new()
            .with_registrar_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let student = factory::create_student(db).await?;
        let course = factory::course::CourseFactory::new(db)
            .credits(3)
            .build()
            .await?;
        factory::enrollment::EnrollmentFactory::new(db, student.id, course.id)
            .status(EnrollmentStatusEntity::Passed)
            .grade(Some(75.5))
            .build()
            .await?;

        let updated = AcademicRecordService::new(db)
            .recompute(student.id)
            .await
            .unwrap();

        assert_eq!(updated.gpa, 75.5);
        assert_eq!(updated.credits_completed, 3);

        Ok(())
    }

    #[tokio::test]
    async fn recompute_reports_missing_student_as_internal_error() {
        use test_utils::builder::TestBuilder;

        let test = TestBuilder::new()
            .with_registrar_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let result = AcademicRecordService::new(db).recompute(42).await;

        assert!(matches!(result, Err(AppError::InternalError(_))));
    }
}

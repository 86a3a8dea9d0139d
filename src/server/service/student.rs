use std::collections::HashMap;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        course::CourseRepository, enrollment::EnrollmentRepository, student::StudentRepository,
    },
    error::AppError,
    model::{
        enrollment::EnrollmentDetail,
        student::{
            CreateStudentParams, Student, StudentDetail, StudentSearchParams, UpdateStudentParams,
        },
    },
};

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new student after checking that the code is unused
    pub async fn create(&self, params: CreateStudentParams) -> Result<Student, AppError> {
        let repo = StudentRepository::new(self.db);

        if repo.code_exists(&params.student_code).await? {
            return Err(AppError::BadRequest(
                "A student with this code already exists".to_string(),
            ));
        }

        let student = repo.create(params).await?;

        tracing::info!("Created student {} ({})", student.id, student.student_code);

        Ok(student)
    }

    /// Gets every student with their enrollments and courses
    pub async fn get_all(&self) -> Result<Vec<StudentDetail>, AppError> {
        let students = StudentRepository::new(self.db).get_all().await?;

        self.with_enrollments(students).await
    }

    /// Gets the students matching the search filters with their enrollments and courses
    pub async fn search(&self, params: StudentSearchParams) -> Result<Vec<StudentDetail>, AppError> {
        let students = StudentRepository::new(self.db).search(&params).await?;

        self.with_enrollments(students).await
    }

    /// Gets a specific student with enrollments and courses
    pub async fn get_by_id(&self, id: i32) -> Result<Option<StudentDetail>, AppError> {
        let Some(student) = StudentRepository::new(self.db).get_by_id(id).await? else {
            return Ok(None);
        };

        let mut details = self.with_enrollments(vec![student]).await?;

        Ok(details.pop())
    }

    /// Updates a student
    /// Returns None if the student doesn't exist
    pub async fn update(&self, params: UpdateStudentParams) -> Result<Option<Student>, AppError> {
        let repo = StudentRepository::new(self.db);

        if repo.get_by_id(params.id).await?.is_none() {
            return Ok(None);
        }

        let student = repo.update(params).await?;

        Ok(Some(student))
    }

    /// Deletes a student together with its enrollments
    /// Returns false if the student doesn't exist
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let deleted = StudentRepository::new(self.db).delete(id).await?;

        if deleted > 0 {
            tracing::info!("Deleted student {}", id);
        }

        Ok(deleted > 0)
    }

    /// Deletes every listed student, returning the number of deleted rows
    pub async fn delete_many(&self, ids: &[i32]) -> Result<u64, AppError> {
        if ids.is_empty() {
            return Err(AppError::BadRequest(
                "A non-empty array of IDs is required".to_string(),
            ));
        }

        let deleted = StudentRepository::new(self.db).delete_many(ids).await?;

        tracing::info!("Deleted {} students", deleted);

        Ok(deleted)
    }

    /// Attaches enrollments and their courses to each student, preserving student order
    async fn with_enrollments(
        &self,
        students: Vec<Student>,
    ) -> Result<Vec<StudentDetail>, AppError> {
        let student_ids: Vec<i32> = students.iter().map(|s| s.id).collect();

        let enrollments = EnrollmentRepository::new(self.db)
            .get_by_student_ids(&student_ids)
            .await?;

        let mut course_ids: Vec<i32> = enrollments.iter().map(|e| e.course_id).collect();
        course_ids.sort_unstable();
        course_ids.dedup();

        let courses: HashMap<i32, _> = CourseRepository::new(self.db)
            .get_by_ids(&course_ids)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        let mut by_student: HashMap<i32, Vec<EnrollmentDetail>> = HashMap::new();
        for enrollment in enrollments {
            let course = courses.get(&enrollment.course_id).cloned();
            by_student
                .entry(enrollment.student_id)
                .or_default()
                .push(EnrollmentDetail {
                    enrollment,
                    student: None,
                    course,
                });
        }

        Ok(students
            .into_iter()
            .map(|student| StudentDetail {
                enrollments: by_student.remove(&student.id).unwrap_or_default(),
                student,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::student::StudentStatus;
    use test_utils::{builder::TestBuilder, factory};

    fn create_params(student_code: &str, email: &str) -> CreateStudentParams {
        CreateStudentParams {
            student_code: student_code.to_string(),
            first_name: "Katherine".to_string(),
            last_name: "Johnson".to_string(),
            email: email.to_string(),
            phone: None,
            birth_date: None,
            admission_date: None,
            status: StudentStatus::Active,
        }
    }

    /// Tests that a reused student code is rejected before insertion.
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

        let service = StudentService::new(db);
        service
            .create(create_params("STU-9", "kj@example.com"))
            .await?;

        let result = service
            .create(create_params("STU-9", "other@example.com"))
            .await;

        assert!(matches!(
            result,
            Err(AppError::BadRequest(msg)) if msg == "A student with this code already exists"
        ));

        Ok(())
    }

    /// Tests that listing attaches enrollments with their courses.
    ///
    /// Expected: Ok with each student's own enrollments only
    #[tokio::test]
    async fn lists_students_with_enrollments_and_courses() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_registrar_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let enrolled = factory::create_student(db).await?;
        let idle = factory::create_student(db).await?;
        let course = factory::create_course(db).await?;
        factory::create_enrollment(db, enrolled.id, course.id).await?;

        let students = StudentService::new(db).get_all().await?;

        assert_eq!(students.len(), 2);
        assert_eq!(students[0].student.id, enrolled.id);
        assert_eq!(students[0].enrollments.len(), 1);
        let detail = &students[0].enrollments[0];
        assert_eq!(detail.course.as_ref().map(|c| c.id), Some(course.id));
        assert!(detail.student.is_none());
        assert_eq!(students[1].student.id, idle.id);
        assert!(students[1].enrollments.is_empty());

        Ok(())
    }

    /// Tests update and delete of a missing student.
    ///
    /// Expected: Ok(None) and Ok(false)
    #[tokio::test]
    async fn reports_missing_student() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_registrar_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = StudentService::new(db);

        assert!(service.get_by_id(5).await?.is_none());
        assert!(service
            .update(UpdateStudentParams {
                id: 5,
                ..Default::default()
            })
            .await?
            .is_none());
        assert!(!service.delete(5).await?);

        Ok(())
    }

    /// Tests bulk delete validation.
    ///
    /// Expected: Err(AppError::BadRequest) for an empty list
    #[tokio::test]
    async fn bulk_delete_requires_ids() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_registrar_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let result = StudentService::new(db).delete_many(&[]).await;

        assert!(matches!(
            result,
            Err(AppError::BadRequest(msg)) if msg == "A non-empty array of IDs is required"
        ));

        Ok(())
    }

    /// Tests that a duplicate email on update surfaces as a 400 envelope.
    ///
    /// Verifies that the SQLite unique violation is mapped with the column name.
    ///
    /// Expected: 400 with `A record with this email already exists`
    #[tokio::test]
    async fn duplicate_email_on_update_maps_to_bad_request() -> Result<(), AppError> {
        use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};

        use crate::model::api::ErrorDto;

        let test = TestBuilder::new()
            .with_registrar_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = StudentService::new(db);
        let first = service
            .create(create_params("STU-1", "first@example.com"))
            .await?;
        let second = service
            .create(create_params("STU-2", "second@example.com"))
            .await?;

        let err = service
            .update(UpdateStudentParams {
                id: second.id,
                email: Some(first.email),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::DbErr(_)));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let error: ErrorDto = serde_json::from_slice(&body).unwrap();
        assert!(!error.success);
        assert_eq!(error.message, "A record with this email already exists");

        Ok(())
    }
}

use super::*;
use chrono::NaiveDate;

/// Tests creating a student with default academic values.
///
/// Verifies that the repository stores the provided fields, starts GPA and
/// credits at zero and sets the admission date to today.
///
/// Expected: Ok with student created
#[tokio::test]
async fn creates_student_with_defaults() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let student = repo
        .create(create_params("STU-100", "stu100@example.com"))
        .await?;

    assert!(student.id > 0);
    assert_eq!(student.student_code, "STU-100");
    assert_eq!(student.status, StudentStatus::Active);
    assert_eq!(student.gpa, 0.0);
    assert_eq!(student.credits_completed, 0);
    assert_eq!(student.admission_date, Utc::now().date_naive());

    Ok(())
}

/// Tests creating a student with an explicit admission date.
///
/// Expected: Ok with the provided admission date stored
#[tokio::test]
async fn keeps_explicit_admission_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admission_date = NaiveDate::from_ymd_opt(2022, 8, 15).unwrap();
    let repo = StudentRepository::new(db);
    let student = repo
        .create(CreateStudentParams {
            admission_date: Some(admission_date),
            ..create_params("STU-101", "stu101@example.com")
        })
        .await?;

    assert_eq!(student.admission_date, admission_date);

    Ok(())
}

/// Tests that a duplicate email is rejected by the unique constraint.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    repo.create(create_params("STU-102", "same@example.com"))
        .await?;

    let result = repo
        .create(create_params("STU-103", "same@example.com"))
        .await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

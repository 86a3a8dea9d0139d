use super::*;
use test_utils::factory::helpers::create_enrollment_with_dependencies;

/// Tests deleting a student by ID.
///
/// Expected: Ok(1) and the student is gone
#[tokio::test]
async fn deletes_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let deleted = repo.delete(student.id).await?;

    assert_eq!(deleted, 1);
    assert!(repo.get_by_id(student.id).await?.is_none());

    Ok(())
}

/// Tests that deleting a student removes its enrollments.
///
/// Verifies the `ON DELETE CASCADE` foreign key on `enrollment.student_id`.
///
/// Expected: Ok with no enrollments left
#[tokio::test]
async fn cascades_to_enrollments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registrar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, course, _) = create_enrollment_with_dependencies(db).await?;

    let repo = StudentRepository::new(db);
    repo.delete(student.id).await?;

    let remaining = Enrollment::find().count(db).await?;
    assert_eq!(remaining, 0);
    assert!(Course::find_by_id(course.id).one(db).await?.is_some());

    Ok(())
}

/// Tests deleting a student that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_missing_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);

    assert_eq!(repo.delete(12).await?, 0);

    Ok(())
}

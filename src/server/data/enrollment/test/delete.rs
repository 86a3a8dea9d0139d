use super::*;
use test_utils::factory::helpers::create_enrollment_with_dependencies;

/// Tests deleting an enrollment.
///
/// Verifies that the student and course are kept.
///
/// Expected: Ok(1) then Ok(0) for a repeated delete
#[tokio::test]
async fn deletes_enrollment_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registrar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, course, enrollment) = create_enrollment_with_dependencies(db).await?;

    let repo = EnrollmentRepository::new(db);

    assert_eq!(repo.delete(enrollment.id).await?, 1);
    assert_eq!(repo.delete(enrollment.id).await?, 0);
    assert!(entity::prelude::Student::find_by_id(student.id)
        .one(db)
        .await?
        .is_some());
    assert!(entity::prelude::Course::find_by_id(course.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

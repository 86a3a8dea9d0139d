use super::*;
use test_utils::factory::helpers::create_enrollment_with_dependencies;

/// Tests deleting unreferenced courses one by one and in bulk.
///
/// Expected: Ok with the number of deleted rows
#[tokio::test]
async fn deletes_unreferenced_courses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Course)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_course(db).await?;
    let second = factory::create_course(db).await?;
    let third = factory::create_course(db).await?;

    let repo = CourseRepository::new(db);

    assert_eq!(repo.delete(first.id).await?, 1);
    assert_eq!(repo.delete_many(&[second.id, third.id]).await?, 2);
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}

/// Tests that a referenced course cannot be deleted.
///
/// Verifies the `ON DELETE RESTRICT` foreign key on `enrollment.course_id`.
///
/// Expected: Err with a foreign key violation
#[tokio::test]
async fn restricts_delete_of_enrolled_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registrar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course, _) = create_enrollment_with_dependencies(db).await?;

    let repo = CourseRepository::new(db);
    let result = repo.delete(course.id).await;

    assert!(result.is_err());
    assert!(repo.get_by_id(course.id).await?.is_some());

    Ok(())
}

use super::*;

/// Tests getting a student by ID.
///
/// Expected: Ok(Some(Student))
#[tokio::test]
async fn gets_existing_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let student = repo.get_by_id(created.id).await?;

    assert!(student.is_some());
    assert_eq!(student.unwrap().email, created.email);

    Ok(())
}

/// Tests getting a student that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let student = repo.get_by_id(404).await?;

    assert!(student.is_none());

    Ok(())
}

/// Tests batch lookup by IDs.
///
/// Verifies that unknown IDs are skipped and an empty slice issues no query.
///
/// Expected: Ok with only the existing students
#[tokio::test]
async fn gets_students_by_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_student(db).await?;
    let _second = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let students = repo.get_by_ids(&[first.id, 9999]).await?;

    assert_eq!(students.len(), 1);
    assert_eq!(students[0].id, first.id);
    assert!(repo.get_by_ids(&[]).await?.is_empty());

    Ok(())
}

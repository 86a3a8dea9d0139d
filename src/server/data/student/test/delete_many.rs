use super::*;

/// Tests bulk deletion.
///
/// Verifies that only the listed students are deleted and unknown IDs are ignored.
///
/// Expected: Ok(2) with one student left
#[tokio::test]
async fn deletes_listed_students() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_student(db).await?;
    let second = factory::create_student(db).await?;
    let kept = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let deleted = repo.delete_many(&[first.id, second.id, 4040]).await?;

    assert_eq!(deleted, 2);
    let remaining = repo.get_all().await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept.id);

    Ok(())
}

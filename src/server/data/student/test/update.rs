use super::*;

/// Tests a partial update.
///
/// Verifies that only the provided fields change and `updated_at` moves forward.
///
/// Expected: Ok with updated student
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let updated = repo
        .update(UpdateStudentParams {
            id: created.id,
            first_name: Some("Augusta".to_string()),
            phone: Some(Some("555-0100".to_string())),
            status: Some(StudentStatus::Inactive),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.first_name, "Augusta");
    assert_eq!(updated.last_name, created.last_name);
    assert_eq!(updated.phone.as_deref(), Some("555-0100"));
    assert_eq!(updated.status, StudentStatus::Inactive);
    assert!(updated.updated_at >= created.updated_at);

    Ok(())
}

/// Tests clearing a nullable column.
///
/// Expected: Ok with phone cleared
#[tokio::test]
async fn clears_nullable_column() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_student(db).await?;
    let repo = StudentRepository::new(db);
    repo.update(UpdateStudentParams {
        id: created.id,
        phone: Some(Some("555-0100".to_string())),
        ..Default::default()
    })
    .await?;

    let updated = repo
        .update(UpdateStudentParams {
            id: created.id,
            phone: Some(None),
            ..Default::default()
        })
        .await?;

    assert!(updated.phone.is_none());

    Ok(())
}

/// Tests storing recomputed academic totals.
///
/// Expected: Ok with gpa and credits replaced
#[tokio::test]
async fn sets_academic_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let updated = repo.set_academic_record(created.id, 87.25, 9).await?;

    assert_eq!(updated.gpa, 87.25);
    assert_eq!(updated.credits_completed, 9);

    Ok(())
}

/// Tests updating a student that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let result = repo
        .update(UpdateStudentParams {
            id: 77,
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}

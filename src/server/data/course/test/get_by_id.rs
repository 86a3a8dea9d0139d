use super::*;

/// Tests getting a course by ID and batch lookup.
///
/// Expected: Ok(Some(Course)) for the created course, Ok(None) otherwise
#[tokio::test]
async fn gets_course_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Course)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_course(db).await?;

    let repo = CourseRepository::new(db);

    assert_eq!(
        repo.get_by_id(created.id).await?.map(|c| c.course_code),
        Some(created.course_code)
    );
    assert!(repo.get_by_id(created.id + 1).await?.is_none());
    assert_eq!(repo.get_by_ids(&[created.id, 500]).await?.len(), 1);

    Ok(())
}

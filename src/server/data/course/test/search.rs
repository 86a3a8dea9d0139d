use super::*;
use entity::sea_orm_active_enums::CourseLevel as CourseLevelEntity;
use test_utils::factory::course::CourseFactory;

async fn seed(db: &DatabaseConnection) -> Result<(), DbErr> {
    CourseFactory::new(db)
        .name("Linear Algebra")
        .credits(3)
        .level(CourseLevelEntity::Basic)
        .build()
        .await?;
    CourseFactory::new(db)
        .name("Abstract Algebra")
        .credits(5)
        .level(CourseLevelEntity::Advanced)
        .build()
        .await?;
    CourseFactory::new(db)
        .name("Compilers")
        .credits(6)
        .level(CourseLevelEntity::Advanced)
        .active(false)
        .build()
        .await?;

    Ok(())
}

/// Tests searching by name substring, case-insensitively.
///
/// Expected: Ok with both algebra courses
#[tokio::test]
async fn matches_name_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Course)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = CourseRepository::new(db);
    let courses = repo
        .search(&CourseSearchParams {
            name: Some("algebra".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(courses.len(), 2);

    Ok(())
}

/// Tests combining level, inclusive credit range and active flag.
///
/// Expected: Ok with only "Abstract Algebra"
#[tokio::test]
async fn combines_level_credits_and_active() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Course)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = CourseRepository::new(db);
    let courses = repo
        .search(&CourseSearchParams {
            level: Some(CourseLevel::Advanced),
            credits_min: Some(5),
            credits_max: Some(6),
            active: Some(true),
            ..Default::default()
        })
        .await?;

    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].name, "Abstract Algebra");

    Ok(())
}

/// Tests searching a course name with accented letters in a different case.
///
/// Expected: Ok with the single matching course
#[tokio::test]
async fn matches_accented_name_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Course)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;
    CourseFactory::new(db)
        .name("Álgebra Lineal")
        .build()
        .await?;

    let repo = CourseRepository::new(db);
    let courses = repo
        .search(&CourseSearchParams {
            name: Some("ÁLGEBRA".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].name, "Álgebra Lineal");

    Ok(())
}

//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique codes in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a student, a course and an enrollment linking them, all with defaults.
///
/// # Returns
/// - `Ok((student, course, enrollment))` - The created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_enrollment_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::student::Model,
        entity::course::Model,
        entity::enrollment::Model,
    ),
    DbErr,
> {
    let student = crate::factory::student::create_student(db).await?;
    let course = crate::factory::course::create_course(db).await?;
    let enrollment =
        crate::factory::enrollment::create_enrollment(db, student.id, course.id).await?;

    Ok((student, course, enrollment))
}

//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults and unique codes so tests only spell out
//! the fields they care about. Each entity has a `Factory` builder and a `create_*`
//! convenience function.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let student = factory::create_student(&db).await?;
//! let course = factory::course::CourseFactory::new(&db).credits(5).build().await?;
//! let enrollment = factory::enrollment::EnrollmentFactory::new(&db, student.id, course.id)
//!     .grade(Some(91.0))
//!     .build()
//!     .await?;
//! ```

pub mod course;
pub mod enrollment;
pub mod helpers;
pub mod student;

pub use course::create_course;
pub use enrollment::create_enrollment;
pub use student::create_student;

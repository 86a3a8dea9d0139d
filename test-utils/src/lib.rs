//! Registrar Test Utils
//!
//! Shared testing utilities for the registrar application. The crate offers a builder for
//! test contexts backed by in-memory SQLite databases, fixtures for in-memory entity models,
//! and factories that insert entities with unique codes.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn creates_enrollment() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_registrar_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (student, course, enrollment) =
//!         factory::helpers::create_enrollment_with_dependencies(db).await?;
//!     assert_eq!(enrollment.student_id, student.id);
//!     assert_eq!(enrollment.course_id, course.id);
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;

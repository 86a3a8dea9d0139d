//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests and supply the default values
//! used by the factories. Unlike factories, fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let student = fixture::student::entity();
//!
//! let course = fixture::course::entity_builder()
//!     .credits(4)
//!     .build();
//! ```

pub mod course;
pub mod enrollment;
pub mod student;

pub use course::{entity as course_entity, entity_builder as course_entity_builder};
pub use enrollment::{entity as enrollment_entity, entity_builder as enrollment_entity_builder};
pub use student::{entity as student_entity, entity_builder as student_entity_builder};

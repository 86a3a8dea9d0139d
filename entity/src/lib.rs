//! SeaORM entity models for the registrar database.
//!
//! One module per table plus the string-backed enums stored in status and level columns.

pub mod prelude;

pub mod course;
pub mod enrollment;
pub mod sea_orm_active_enums;
pub mod student;

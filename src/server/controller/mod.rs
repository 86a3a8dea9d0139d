//! HTTP request handlers.
//!
//! Controllers convert request DTOs into validated parameters, call the matching service
//! and wrap the resulting domain models in the API response envelope. Each handler carries
//! a `utoipa::path` annotation that feeds the generated OpenAPI document.

pub mod course;
pub mod enrollment;
pub mod health;
pub mod student;

#[cfg(test)]
mod test;

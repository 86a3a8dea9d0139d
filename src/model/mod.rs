//! Data transfer objects shared between the client and the server.
//!
//! These types are compiled for both targets. Server-only derives such as `ToSchema` and
//! `IntoParams` are gated behind the `server` feature.

pub mod api;
pub mod course;
pub mod enrollment;
pub mod student;

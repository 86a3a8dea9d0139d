//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses carrying the `{ success: false, message }`
//! envelope. The `AppError` enum is the top-level error type returned by services and
//! controllers.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::config::ConfigError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Unique and foreign key violations result in 400 Bad Request, anything else in
    /// 500 Internal Server Error with the details logged server-side.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` and constraint violations reported by the database
/// - 404 Not Found - For `NotFound` variant
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, Json(ErrorDto::new(msg))).into_response(),
            Self::BadRequest(msg) => {
                tracing::debug!("Rejected request: {}", msg);
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(msg))).into_response()
            }
            Self::DbErr(err) => match constraint_violation_message(&err) {
                Some(msg) => (StatusCode::BAD_REQUEST, Json(ErrorDto::new(msg))).into_response(),
                None => InternalServerError(err).into_response(),
            },
            Self::InternalError(msg) => InternalServerError(msg).into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Maps a database constraint violation to the message shown to API clients.
///
/// Returns `None` for every other kind of database error.
fn constraint_violation_message(err: &DbErr) -> Option<String> {
    match err.sql_err()? {
        SqlErr::UniqueConstraintViolation(detail) => Some(format!(
            "A record with this {} already exists",
            violated_field(&detail)
        )),
        SqlErr::ForeignKeyConstraintViolation(_) => {
            Some("The referenced record does not exist".to_string())
        }
        _ => None,
    }
}

/// Extracts the column name from a driver message such as
/// `UNIQUE constraint failed: student.email`.
fn violated_field(detail: &str) -> &str {
    detail
        .rsplit(':')
        .next()
        .and_then(|columns| columns.split(',').next())
        .map(|column| column.trim())
        .map(|column| column.rsplit('.').next().unwrap_or(column))
        .filter(|column| !column.is_empty())
        .unwrap_or("value")
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_column_from_sqlite_message() {
        assert_eq!(
            violated_field("UNIQUE constraint failed: student.email"),
            "email"
        );
    }

    #[test]
    fn extracts_first_column_of_composite_index() {
        assert_eq!(
            violated_field("UNIQUE constraint failed: enrollment.student_id, enrollment.course_id"),
            "student_id"
        );
    }

    #[test]
    fn falls_back_when_message_has_no_column() {
        assert_eq!(violated_field(""), "value");
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = AppError::NotFound("Student not found".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn generic_database_error_maps_to_500() {
        let response = AppError::DbErr(DbErr::Custom("boom".to_string())).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

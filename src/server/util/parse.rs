use chrono::{DateTime, NaiveDate};

use crate::server::error::AppError;

/// Parses a calendar date from a request field.
///
/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp, in which case the date part
/// of the timestamp in its own offset is used.
///
/// # Arguments
/// - `field` - Name of the request field, used in the error message
/// - `value` - Raw value from the request body
///
/// # Returns
/// - `Ok(NaiveDate)` - Successfully parsed date
/// - `Err(AppError::BadRequest)` - Value is neither format
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, AppError> {
    let value = value.trim();

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|dt| dt.date_naive()))
        .map_err(|_| {
            AppError::BadRequest(format!(
                "Invalid date for {}: expected YYYY-MM-DD",
                field
            ))
        })
}

/// Parses an optional date where an empty string means no date.
pub fn parse_optional_date(field: &str, value: Option<&str>) -> Result<Option<NaiveDate>, AppError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_date(field, value).map(Some),
    }
}

/// Parses a date for a partial update of a nullable column.
///
/// # Returns
/// - `Ok(None)` - Field absent, leave the column unchanged
/// - `Ok(Some(None))` - Empty string, clear the column
/// - `Ok(Some(Some(date)))` - Set the column to `date`
/// - `Err(AppError::BadRequest)` - Value is not a date
pub fn parse_date_update(
    field: &str,
    value: Option<&str>,
) -> Result<Option<Option<NaiveDate>>, AppError> {
    value
        .map(|value| parse_optional_date(field, Some(value)))
        .transpose()
}

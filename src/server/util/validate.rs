use crate::server::error::AppError;

/// Fails with the names of every required field that is blank.
///
/// # Arguments
/// - `fields` - Pairs of field name and submitted value
///
/// # Returns
/// - `Ok(())` - Every field has a non-blank value
/// - `Err(AppError::BadRequest)` - Lists the missing fields in the order given
pub fn require_fields(fields: &[(&str, &str)]) -> Result<(), AppError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )))
    }
}

/// Trims an optional replacement for a required column, rejecting blank values.
pub fn non_blank(field: &str, value: Option<String>) -> Result<Option<String>, AppError> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if v.is_empty() => Err(AppError::BadRequest(format!("{} cannot be empty", field))),
        other => Ok(other),
    }
}

/// Normalizes free text for a nullable column: blank becomes `None`.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Normalizes free text for a partial update of a nullable column.
///
/// Absent stays `None` (unchanged), blank becomes `Some(None)` (cleared).
pub fn optional_text_update(value: Option<String>) -> Option<Option<String>> {
    value.map(|v| optional_text(Some(v)))
}

/// Validates a grade on the `0..=100` scale.
pub fn grade_in_range(value: Option<f64>) -> Result<Option<f64>, AppError> {
    match value {
        Some(g) if !(0.0..=100.0).contains(&g) => Err(AppError::BadRequest(
            "Grade must be between 0 and 100".to_string(),
        )),
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_missing_field() {
        let err = require_fields(&[("student_code", ""), ("first_name", "Ada"), ("email", "  ")])
            .unwrap_err();

        assert_eq!(err.to_string(), "Missing required fields: student_code, email");
    }

    #[test]
    fn accepts_filled_fields() {
        assert!(require_fields(&[("name", "Algebra")]).is_ok());
    }

    #[test]
    fn rejects_blank_replacement() {
        assert!(non_blank("email", Some(" ".to_string())).is_err());
        assert_eq!(non_blank("email", None).unwrap(), None);
        assert_eq!(
            non_blank("email", Some(" a@b.c ".to_string())).unwrap(),
            Some("a@b.c".to_string())
        );
    }

    #[test]
    fn blank_update_clears_column() {
        assert_eq!(optional_text_update(Some("".to_string())), Some(None));
        assert_eq!(optional_text_update(None), None);
    }

    #[test]
    fn grade_must_be_within_scale() {
        assert!(grade_in_range(Some(100.0)).is_ok());
        assert!(grade_in_range(Some(0.0)).is_ok());
        assert!(grade_in_range(Some(100.5)).is_err());
        assert!(grade_in_range(Some(-1.0)).is_err());
        assert!(grade_in_range(None).is_ok());
    }
}

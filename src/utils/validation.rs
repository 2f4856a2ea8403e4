//! Validation helpers
//!
//! Field-level checks used by the request DTOs, plus conversion of
//! form strings into typed date and timestamp values.

use chrono::{NaiveDate, NaiveDateTime};
use validator::{ValidationError, ValidationErrors};

use crate::utils::errors::AppError;

/// Formats accepted for timestamps. The first two are what an HTML
/// `datetime-local` input submits.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Parse a `YYYY-MM-DD` date
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error.message = Some("expected a date formatted YYYY-MM-DD".into());
        error
    })
}

/// Parse a timestamp in any of the accepted formats
pub fn validate_timestamp(value: &str) -> Result<NaiveDateTime, ValidationError> {
    let trimmed = value.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| {
            let mut error = ValidationError::new("timestamp");
            error.add_param("value".into(), &value.to_string());
            error.add_param("format".into(), &"YYYY-MM-DD HH:MM[:SS]".to_string());
            error.message = Some("expected a timestamp formatted YYYY-MM-DD HH:MM".into());
            error
        })
}

/// Reject blank strings
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.message = Some("is required".into());
        return Err(error);
    }
    Ok(())
}

/// Reject NaN and infinities, which SQLite cannot store as REAL
pub fn validate_finite(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        let mut error = ValidationError::new("finite");
        error.add_param("value".into(), &value.to_string());
        error.message = Some("must be a finite number".into());
        return Err(error);
    }
    Ok(())
}

/// Parse a required date field, attributing failures to `field`
pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, AppError> {
    validate_date(value).map_err(|e| field_error(field, e))
}

/// Parse an optional date field; blank means absent
pub fn parse_optional_date(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<NaiveDate>, AppError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => parse_date(field, v).map(Some),
    }
}

/// Parse a required timestamp field, attributing failures to `field`
pub fn parse_timestamp(field: &'static str, value: &str) -> Result<NaiveDateTime, AppError> {
    validate_timestamp(value).map_err(|e| field_error(field, e))
}

fn field_error(field: &'static str, error: ValidationError) -> AppError {
    let mut errors = ValidationErrors::new();
    errors.add(field, error);
    AppError::Validation(errors)
}

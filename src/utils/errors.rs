//! Error handling
//!
//! Defines every error the service can produce and how each one is turned
//! into an HTTP response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use sqlx::error::ErrorKind;
use thiserror::Error;

/// Application errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// API error body
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl AppError {
    /// Status code used by both the JSON API and the HTML screens.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(e) if constraint_kind(e).is_some() => StatusCode::CONFLICT,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
        }
    }

    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Database(e) if constraint_kind(e).is_some() => "CONSTRAINT_VIOLATION",
            AppError::Database(_) => "DB_ERROR",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Conflict(_) => "CONFLICT",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Message shown to whoever submitted the request.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Database(e) => match (constraint_kind(e), e.as_database_error()) {
                (Some(kind), Some(db)) => format!("{}: {}", kind, db.message()),
                _ => "An error occurred while accessing the database".to_string(),
            },
            AppError::Validation(errors) => describe_validation(errors),
            AppError::NotFound(msg)
            | AppError::Conflict(msg)
            | AppError::BadRequest(msg) => msg.clone(),
            AppError::Internal(_) => "An unexpected error occurred".to_string(),
        }
    }

    pub(crate) fn log(&self) {
        match self.status_code() {
            status if status.is_server_error() => tracing::error!(code = self.code(), "{}", self),
            _ => tracing::warn!(code = self.code(), "{}", self),
        }
    }
}

/// Names the constraint a database error violated, if any.
fn constraint_kind(error: &sqlx::Error) -> Option<&'static str> {
    match error.as_database_error()?.kind() {
        ErrorKind::UniqueViolation => Some("Duplicate value"),
        ErrorKind::ForeignKeyViolation => Some("Referenced row missing or still referenced"),
        ErrorKind::NotNullViolation => Some("Missing required value"),
        ErrorKind::CheckViolation => Some("Value rejected"),
        _ => None,
    }
}

/// Flattens field errors into `field: message` pairs, sorted by field.
fn describe_validation(errors: &validator::ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| *field);

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => format!("{}: {}", field, message),
                None => format!("{}: invalid value ({})", field, e.code),
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();

        let status = self.status_code();
        let details = match &self {
            AppError::Validation(e) => Some(json!(e)),
            AppError::Database(e) if constraint_kind(e).is_none() => {
                Some(json!({ "sql_error": e.to_string() }))
            }
            AppError::Internal(msg) => Some(json!({ "internal_error": msg })),
            _ => None,
        };

        let body = ErrorResponse {
            error: status
                .canonical_reason()
                .unwrap_or("Error")
                .to_string(),
            message: self.user_message(),
            details,
            code: Some(self.code().to_string()),
        };

        (status, Json(body)).into_response()
    }
}

/// Result alias for fallible operations
pub type AppResult<T> = Result<T, AppError>;

/// Builds a single-field validation error
pub fn validation_error(field: &'static str, message: &'static str) -> AppError {
    use validator::ValidationError;

    let mut error = ValidationError::new("custom");
    error.message = Some(message.into());

    let mut errors = validator::ValidationErrors::new();
    errors.add(field, error);

    AppError::Validation(errors)
}

/// Builds a not-found error for a table label
pub fn not_found_error(resource: &str) -> AppError {
    AppError::NotFound(format!("{} not found.", resource))
}

/// Builds a bad-request error
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}

/// Builds an internal error
pub fn internal_error(message: &str) -> AppError {
    AppError::Internal(message.to_string())
}

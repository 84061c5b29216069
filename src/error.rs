//! Application error taxonomy and HTTP rendering.
//!
//! Caller errors (`InvalidUrl`, `InvalidCodeFormat`, `CodeTaken`) are surfaced
//! as structured rejections and never retried. `AllocationExhausted` and
//! `StoreUnavailable` are fatal for the request. `NotFound` during resolution
//! is a normal outcome, not an exceptional one.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload rendered in every error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug)]
pub enum AppError {
    /// Target URL is not a well-formed absolute http(s) URL.
    InvalidUrl { message: String, details: Value },
    /// Requested custom code violates `^[A-Za-z0-9]{6,8}$`.
    InvalidCodeFormat { message: String, details: Value },
    /// Caller-chosen code already maps to another target.
    CodeTaken { message: String, details: Value },
    /// Random code generation kept colliding past the attempt cap.
    AllocationExhausted { message: String, details: Value },
    NotFound { message: String, details: Value },
    /// The backing store failed or is unreachable.
    StoreUnavailable { message: String, details: Value },
}

impl AppError {
    pub fn invalid_url(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidUrl {
            message: message.into(),
            details,
        }
    }
    pub fn invalid_code_format(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidCodeFormat {
            message: message.into(),
            details,
        }
    }
    pub fn code_taken(message: impl Into<String>, details: Value) -> Self {
        Self::CodeTaken {
            message: message.into(),
            details,
        }
    }
    pub fn allocation_exhausted(message: impl Into<String>, details: Value) -> Self {
        Self::AllocationExhausted {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn store_unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
            details,
        }
    }

    fn parts(self) -> (StatusCode, &'static str, String, Value) {
        match self {
            AppError::InvalidUrl { message, details } => {
                (StatusCode::BAD_REQUEST, "invalid_url", message, details)
            }
            AppError::InvalidCodeFormat { message, details } => (
                StatusCode::BAD_REQUEST,
                "invalid_code_format",
                message,
                details,
            ),
            AppError::CodeTaken { message, details } => {
                (StatusCode::CONFLICT, "code_taken", message, details)
            }
            AppError::AllocationExhausted { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "allocation_exhausted",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::StoreUnavailable { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "store_unavailable",
                message,
                details,
            ),
        }
    }

    /// Extracts the serializable error payload without consuming the error.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::InvalidUrl { message, details } => ("invalid_url", message, details),
            AppError::InvalidCodeFormat { message, details } => {
                ("invalid_code_format", message, details)
            }
            AppError::CodeTaken { message, details } => ("code_taken", message, details),
            AppError::AllocationExhausted { message, details } => {
                ("allocation_exhausted", message, details)
            }
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::StoreUnavailable { message, details } => {
                ("store_unavailable", message, details)
            }
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let info = self.to_error_info();
        write!(f, "{}: {}", info.code, info.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = self.parts();

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

// Duplicate keys never reach here: the insert path observes them through
// `ON CONFLICT DO NOTHING`, so any database error left over is a store
// failure.
impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = %e, "database error");
        AppError::store_unavailable("Database error", json!({}))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::invalid_url(
            "Request validation failed",
            serde_json::to_value(e.field_errors()).unwrap_or_else(|_| json!({})),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_info_codes() {
        let err = AppError::code_taken("taken", json!({ "code": "abc123" }));
        let info = err.to_error_info();
        assert_eq!(info.code, "code_taken");
        assert_eq!(info.message, "taken");
        assert_eq!(info.details, json!({ "code": "abc123" }));
    }

    #[test]
    fn test_display_includes_code_and_message() {
        let err = AppError::not_found("Short link not found", json!({}));
        assert_eq!(err.to_string(), "not_found: Short link not found");
    }

    #[test]
    fn test_sqlx_error_maps_to_store_unavailable() {
        let err = AppError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, AppError::StoreUnavailable { .. }));
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                AppError::invalid_url("x", json!({})),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::invalid_code_format("x", json!({})),
                StatusCode::BAD_REQUEST,
            ),
            (AppError::code_taken("x", json!({})), StatusCode::CONFLICT),
            (
                AppError::allocation_exhausted("x", json!({})),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (AppError::not_found("x", json!({})), StatusCode::NOT_FOUND),
            (
                AppError::store_unavailable("x", json!({})),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.parts().0, expected);
        }
    }
}

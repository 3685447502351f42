//! Error types and API response structures

use super::codes::ErrorCode;
use axum::Json;
use axum::response::IntoResponse;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a missing-required-field error
    pub fn required(field: &str) -> Self {
        Self::with_message(ErrorCode::RequiredField, format!("{field} is required"))
            .with_detail("field", field)
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::NotFound, format!("{r} not found")).with_detail("resource", r)
    }

    /// Create an invalid request error
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.http_status();
        (status, Json(ApiResponse::<()>::error(&self))).into_response()
    }
}

/// Result type for API operations
pub type AppResult<T> = Result<T, AppError>;

/// Unified API response envelope
///
/// Success: `{ "success": true, "data": … }` (optionally with `message`).
/// Failure: `{ "success": false, "error": …, "code": … }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable status message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Error message (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Error code (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    /// Additional error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl<T> ApiResponse<T> {
    /// Create a success response with data
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
            code: None,
            details: None,
        }
    }

    /// Create a success response with a custom message and data
    pub fn success_with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
            error: None,
            code: None,
            details: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create an error response from an [`AppError`]
    pub fn error(err: &AppError) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            error: Some(err.message.clone()),
            code: Some(err.code.code()),
            details: err.details.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let resp = ApiResponse::success(serde_json::json!({ "bookingId": "BK20260101ABCD2345" }));
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["bookingId"], "BK20260101ABCD2345");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_error_envelope_shape() {
        let err = AppError::new(ErrorCode::SignatureInvalid);
        let resp = ApiResponse::<()>::error(&err);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Invalid payment signature");
        assert_eq!(json["code"], 2002);
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_details_carried_through() {
        let err = AppError::required("bookingId");
        let resp = ApiResponse::<()>::error(&err);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["details"]["field"], "bookingId");
    }

    #[test]
    fn test_default_messages() {
        let err = AppError::new(ErrorCode::CampNotFound);
        assert_eq!(err.message, "Camp not found");
        assert_eq!(err.http_status(), StatusCode::NOT_FOUND);
    }
}

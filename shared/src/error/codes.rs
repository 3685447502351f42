//! Unified error codes for the camp-cloud service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Booking errors
//! - 2xxx: Payment errors
//! - 3xxx: Catalog errors
//! - 4xxx: Content errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Booking ====================
    /// Booking does not exist
    BookingNotFound = 1001,
    /// Booking is already confirmed and paid
    BookingAlreadyConfirmed = 1002,
    /// Booking has been cancelled
    BookingCancelled = 1003,
    /// No slots left for the requested date
    NoAvailability = 1004,

    // ==================== 2xxx: Payment ====================
    /// Gateway order creation failed
    PaymentOrderFailed = 2001,
    /// Payment signature verification failed
    SignatureInvalid = 2002,
    /// Gateway order does not belong to this booking
    OrderMismatch = 2003,
    /// Supplied amount does not match the booking total
    AmountMismatch = 2004,

    // ==================== 3xxx: Catalog ====================
    /// Camp does not exist
    CampNotFound = 3001,

    // ==================== 4xxx: Content ====================
    /// Blog post does not exist
    BlogNotFound = 4001,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9003,
    /// Network/upstream error
    NetworkError = 9004,
    /// Upstream call timed out
    TimeoutError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default human-readable message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",
            Self::InvalidFormat => "Invalid format",
            Self::RequiredField => "Missing required fields",
            Self::ValueOutOfRange => "Value out of range",

            Self::BookingNotFound => "Booking not found",
            Self::BookingAlreadyConfirmed => "Booking is already confirmed",
            Self::BookingCancelled => "Booking has been cancelled",
            Self::NoAvailability => "No availability for the selected date",

            Self::PaymentOrderFailed => "Failed to create payment order",
            Self::SignatureInvalid => "Invalid payment signature",
            Self::OrderMismatch => "Payment order does not match this booking",
            Self::AmountMismatch => "Amount does not match the booking total",

            Self::CampNotFound => "Camp not found",

            Self::BlogNotFound => "Blog post not found",

            Self::InternalError => "Internal server error",
            Self::DatabaseError => "Database error",
            Self::ConfigError => "Configuration error",
            Self::NetworkError => "Upstream service unavailable",
            Self::TimeoutError => "Upstream request timed out",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message(), self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unrecognized u16 into [`ErrorCode`]
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Success),
            1 => Ok(Self::Unknown),
            2 => Ok(Self::ValidationFailed),
            3 => Ok(Self::NotFound),
            4 => Ok(Self::AlreadyExists),
            5 => Ok(Self::InvalidRequest),
            6 => Ok(Self::InvalidFormat),
            7 => Ok(Self::RequiredField),
            8 => Ok(Self::ValueOutOfRange),

            1001 => Ok(Self::BookingNotFound),
            1002 => Ok(Self::BookingAlreadyConfirmed),
            1003 => Ok(Self::BookingCancelled),
            1004 => Ok(Self::NoAvailability),

            2001 => Ok(Self::PaymentOrderFailed),
            2002 => Ok(Self::SignatureInvalid),
            2003 => Ok(Self::OrderMismatch),
            2004 => Ok(Self::AmountMismatch),

            3001 => Ok(Self::CampNotFound),

            4001 => Ok(Self::BlogNotFound),

            9001 => Ok(Self::InternalError),
            9002 => Ok(Self::DatabaseError),
            9003 => Ok(Self::ConfigError),
            9004 => Ok(Self::NetworkError),
            9005 => Ok(Self::TimeoutError),

            other => Err(InvalidErrorCode(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        // General
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::RequiredField.code(), 7);
        assert_eq!(ErrorCode::ValueOutOfRange.code(), 8);

        // Booking
        assert_eq!(ErrorCode::BookingNotFound.code(), 1001);
        assert_eq!(ErrorCode::BookingAlreadyConfirmed.code(), 1002);
        assert_eq!(ErrorCode::BookingCancelled.code(), 1003);
        assert_eq!(ErrorCode::NoAvailability.code(), 1004);

        // Payment
        assert_eq!(ErrorCode::PaymentOrderFailed.code(), 2001);
        assert_eq!(ErrorCode::SignatureInvalid.code(), 2002);
        assert_eq!(ErrorCode::OrderMismatch.code(), 2003);
        assert_eq!(ErrorCode::AmountMismatch.code(), 2004);

        // Catalog / content
        assert_eq!(ErrorCode::CampNotFound.code(), 3001);
        assert_eq!(ErrorCode::BlogNotFound.code(), 4001);

        // System
        assert_eq!(ErrorCode::InternalError.code(), 9001);
        assert_eq!(ErrorCode::TimeoutError.code(), 9005);
    }

    #[test]
    fn test_round_trip() {
        for code in [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::BookingNotFound,
            ErrorCode::SignatureInvalid,
            ErrorCode::CampNotFound,
            ErrorCode::TimeoutError,
        ] {
            assert_eq!(ErrorCode::try_from(code.code()).unwrap(), code);
        }
    }

    #[test]
    fn test_invalid_code_rejected() {
        assert!(ErrorCode::try_from(999).is_err());
        assert!(ErrorCode::try_from(5555).is_err());
    }

    #[test]
    fn test_serde_as_u16() {
        let json = serde_json::to_string(&ErrorCode::SignatureInvalid).unwrap();
        assert_eq!(json, "2002");
        let back: ErrorCode = serde_json::from_str("2002").unwrap();
        assert_eq!(back, ErrorCode::SignatureInvalid);
    }
}

//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound | Self::BookingNotFound | Self::CampNotFound | Self::BlogNotFound => {
                StatusCode::NOT_FOUND
            }

            // 409 Conflict
            Self::AlreadyExists
            | Self::BookingAlreadyConfirmed
            | Self::BookingCancelled
            | Self::NoAvailability => StatusCode::CONFLICT,

            // 502 Bad Gateway (the gateway rejected or garbled the order call)
            Self::PaymentOrderFailed => StatusCode::BAD_GATEWAY,

            // 503 Service Unavailable (transient upstream errors, client can retry)
            Self::NetworkError | Self::TimeoutError => StatusCode::SERVICE_UNAVAILABLE,

            // 500 Internal Server Error
            Self::InternalError | Self::DatabaseError | Self::ConfigError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // 400 Bad Request (default for validation/business errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_status() {
        assert_eq!(ErrorCode::Success.http_status(), StatusCode::OK);
    }

    #[test]
    fn test_not_found_status() {
        assert_eq!(ErrorCode::NotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::BookingNotFound.http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ErrorCode::CampNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::BlogNotFound.http_status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_status() {
        assert_eq!(
            ErrorCode::BookingAlreadyConfirmed.http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ErrorCode::BookingCancelled.http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ErrorCode::NoAvailability.http_status(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_payment_status() {
        assert_eq!(
            ErrorCode::PaymentOrderFailed.http_status(),
            StatusCode::BAD_GATEWAY
        );
        // Signature and reconciliation failures are the caller's problem
        assert_eq!(
            ErrorCode::SignatureInvalid.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::OrderMismatch.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::AmountMismatch.http_status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_service_unavailable_status() {
        assert_eq!(
            ErrorCode::NetworkError.http_status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ErrorCode::TimeoutError.http_status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_internal_error_status() {
        assert_eq!(
            ErrorCode::InternalError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ErrorCode::DatabaseError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_bad_request_status() {
        assert_eq!(
            ErrorCode::ValidationFailed.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::RequiredField.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::ValueOutOfRange.http_status(),
            StatusCode::BAD_REQUEST
        );
    }
}

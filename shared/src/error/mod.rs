//! Unified error system for the camp-cloud service
//!
//! - [`ErrorCode`]: standardized error codes for all error types
//! - [`AppError`]: rich error type with codes, messages, and details
//! - [`ApiResponse`]: unified API response envelope
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Booking errors
//! - 2xxx: Payment errors
//! - 3xxx: Catalog errors
//! - 4xxx: Content errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{ApiResponse, AppError, ErrorCode};
//!
//! // Create a simple error
//! let err = AppError::new(ErrorCode::BookingNotFound);
//!
//! // Create an error with a custom message
//! let err = AppError::with_message(ErrorCode::ValidationFailed, "Invalid email format");
//!
//! // Create an error with details
//! let err = AppError::validation("Missing required field").with_detail("field", "email");
//!
//! // Convert to an API response
//! let response = ApiResponse::<()>::error(&err);
//! ```

mod codes;
mod http;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};

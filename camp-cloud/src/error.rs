//! Unified service-layer error type for camp-cloud
//!
//! `ServiceError` bridges the gap between DB-layer errors (`sqlx::Error`)
//! and the API-layer error (`AppError`). It enables `?` propagation without
//! manual `.map_err(|e| { tracing::error!(...); AppError::new(...) })`
//! boilerplate in every handler.

use axum::response::IntoResponse;
use shared::error::{AppError, ErrorCode};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Service-layer error — only two variants, keeps things simple.
///
/// - `Db`: database/infrastructure errors (auto-logged, mapped to a generic
///   500 so internals never leak to the client)
/// - `App`: business-rule errors (transparent pass-through to the client)
#[derive(Debug)]
pub enum ServiceError {
    Db(BoxError),
    App(AppError),
}

impl From<sqlx::Error> for ServiceError {
    fn from(e: sqlx::Error) -> Self {
        ServiceError::Db(e.into())
    }
}

impl From<BoxError> for ServiceError {
    fn from(e: BoxError) -> Self {
        ServiceError::Db(e)
    }
}

impl From<AppError> for ServiceError {
    fn from(e: AppError) -> Self {
        ServiceError::App(e)
    }
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::App(app_err) => app_err,
            ServiceError::Db(db_err) => {
                tracing::error!(error = %db_err, "Service database error");
                AppError::new(ErrorCode::DatabaseError)
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> axum::response::Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

//! camp-cloud — booking and catalog backend for the WeekendCamps site
//!
//! Long-running service that:
//! - Serves the camp catalog (filterable listing, detail with reviews)
//! - Owns the booking lifecycle (create → payment order → verify → confirmed)
//! - Verifies Razorpay payment signatures before any state transition
//! - Dispatches fire-and-forget email/WhatsApp notifications

mod api;
mod config;
mod db;
mod error;
mod notify;
mod pricing;
mod razorpay;
mod state;
mod util;

use config::Config;
use state::AppState;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "camp_cloud=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!("Starting camp-cloud (env: {})", config.environment);

    // Initialize application state (connects + migrates the database)
    let state = AppState::new(&config).await?;

    let app = api::create_router(state.clone());

    // Periodic booking-lock pruning (every 5 minutes)
    let locks = state.booking_locks.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(300));
        loop {
            interval.tick().await;
            locks.cleanup();
        }
    });

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("camp-cloud HTTP listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}

//! API routes for camp-cloud

pub mod blogs;
pub mod bookings;
pub mod camps;
pub mod contact;
pub mod health;
pub mod payment;
pub mod reviews;
pub mod weather;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the public router
pub fn create_router(state: AppState) -> Router {
    // Catalog + content (read-mostly)
    let catalog = Router::new()
        .route("/api/camps", get(camps::list_camps))
        .route("/api/camps/{slug}", get(camps::camp_detail))
        .route("/api/blogs", get(blogs::list_blogs))
        .route("/api/blogs/{slug}", get(blogs::blog_detail))
        .route("/api/weather", get(weather::current_weather));

    // Booking lifecycle
    let bookings = Router::new()
        .route("/api/bookings", post(bookings::create_booking))
        .route("/api/bookings/{id}", get(bookings::get_booking))
        .route("/api/bookings/{id}/cancel", post(bookings::cancel_booking))
        .route("/api/payment/create-order", post(payment::create_order))
        .route("/api/payment/verify", post(payment::verify_payment));

    // Inbound forms
    let forms = Router::new()
        .route("/api/reviews", post(reviews::submit_review))
        .route("/api/contact", post(contact::submit_contact));

    Router::new()
        .route("/health", get(health::health_check))
        .merge(catalog)
        .merge(bookings)
        .merge(forms)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

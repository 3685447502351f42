//! Contact form endpoint
//!
//! POST /api/contact — store the inquiry, notify the admin

use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use shared::error::{ApiResponse, AppError};
use shared::models::contact::Contact;

use crate::db;
use crate::error::ServiceError;
use crate::state::AppState;
use crate::{notify, util};

type ApiResult<T> = Result<Json<ApiResponse<T>>, ServiceError>;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

pub async fn submit_contact(
    State(state): State<AppState>,
    Json(req): Json<ContactRequest>,
) -> ApiResult<Contact> {
    for (field, value) in [
        ("name", &req.name),
        ("email", &req.email),
        ("phone", &req.phone),
        ("subject", &req.subject),
        ("message", &req.message),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::required(field).into());
        }
    }
    if !req.email.contains('@') {
        return Err(AppError::validation("Invalid email address").into());
    }

    let contact = db::contacts::insert(
        &state.pool,
        &db::contacts::CreateContact {
            name: req.name.trim(),
            email: req.email.trim(),
            phone: req.phone.trim(),
            subject: req.subject.trim(),
            message: req.message.trim(),
            now: util::now_millis(),
        },
    )
    .await?;

    tracing::info!(contact_id = contact.id, "Contact inquiry received");

    notify::contact_received(&state, &contact);

    Ok(Json(ApiResponse::success_with_message(
        "Your message has been sent successfully!",
        contact,
    )))
}

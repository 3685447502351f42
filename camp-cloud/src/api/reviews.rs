//! Review submission endpoint
//!
//! POST /api/reviews — stored unapproved; published after moderation

use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use shared::error::{ApiResponse, AppError, ErrorCode};
use shared::models::review::Review;

use crate::db;
use crate::error::ServiceError;
use crate::state::AppState;
use crate::util;

type ApiResult<T> = Result<Json<ApiResponse<T>>, ServiceError>;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SubmitReviewRequest {
    pub camp_id: i64,
    pub customer_name: String,
    pub email: String,
    pub rating: i32,
    pub comment: String,
}

pub async fn submit_review(
    State(state): State<AppState>,
    Json(req): Json<SubmitReviewRequest>,
) -> ApiResult<Review> {
    if req.customer_name.trim().is_empty() {
        return Err(AppError::required("customerName").into());
    }
    if req.email.trim().is_empty() || !req.email.contains('@') {
        return Err(AppError::validation("Invalid email address").into());
    }
    if req.comment.trim().is_empty() {
        return Err(AppError::required("comment").into());
    }
    if !(1..=5).contains(&req.rating) {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            "Rating must be between 1 and 5",
        )
        .into());
    }

    // Reviews only attach to existing camps
    db::camps::find_by_id(&state.pool, req.camp_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::CampNotFound))?;

    let review = db::reviews::insert(
        &state.pool,
        &db::reviews::CreateReview {
            camp_id: req.camp_id,
            customer_name: req.customer_name.trim(),
            email: req.email.trim(),
            rating: req.rating,
            comment: req.comment.trim(),
            now: util::now_millis(),
        },
    )
    .await?;

    tracing::info!(camp_id = req.camp_id, review_id = review.id, "Review submitted");

    Ok(Json(ApiResponse::success_with_message(
        "Thank you for your review! It will be published after moderation.",
        review,
    )))
}

//! Review queries

use shared::models::review::Review;
use sqlx::PgPool;

pub struct CreateReview<'a> {
    pub camp_id: i64,
    pub customer_name: &'a str,
    pub email: &'a str,
    pub rating: i32,
    pub comment: &'a str,
    pub now: i64,
}

/// Insert a review pending moderation
pub async fn insert(pool: &PgPool, r: &CreateReview<'_>) -> Result<Review, sqlx::Error> {
    sqlx::query_as(
        "INSERT INTO reviews (camp_id, customer_name, email, rating, comment, approved, created_at)
         VALUES ($1, $2, $3, $4, $5, FALSE, $6)
         RETURNING *",
    )
    .bind(r.camp_id)
    .bind(r.customer_name)
    .bind(r.email)
    .bind(r.rating)
    .bind(r.comment)
    .bind(r.now)
    .fetch_one(pool)
    .await
}

/// Approved reviews for a camp, newest first
pub async fn list_approved_for_camp(
    pool: &PgPool,
    camp_id: i64,
    limit: i64,
) -> Result<Vec<Review>, sqlx::Error> {
    sqlx::query_as(
        "SELECT * FROM reviews
         WHERE camp_id = $1 AND approved = TRUE
         ORDER BY created_at DESC
         LIMIT $2",
    )
    .bind(camp_id)
    .bind(limit)
    .fetch_all(pool)
    .await
}

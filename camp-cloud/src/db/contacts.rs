//! Contact inquiry queries

use shared::models::contact::Contact;
use sqlx::PgPool;

pub struct CreateContact<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub subject: &'a str,
    pub message: &'a str,
    pub now: i64,
}

pub async fn insert(pool: &PgPool, c: &CreateContact<'_>) -> Result<Contact, sqlx::Error> {
    sqlx::query_as(
        "INSERT INTO contacts (name, email, phone, subject, message, status, created_at)
         VALUES ($1, $2, $3, $4, $5, 'new', $6)
         RETURNING *",
    )
    .bind(c.name)
    .bind(c.email)
    .bind(c.phone)
    .bind(c.subject)
    .bind(c.message)
    .bind(c.now)
    .fetch_one(pool)
    .await
}

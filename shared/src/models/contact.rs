//! Contact inquiry model

use serde::{Deserialize, Serialize};

/// Contact-form submission; `status` is one of `new`, `read`, `responded`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub status: String,
    pub created_at: i64,
}

//! Customer review model

use serde::{Deserialize, Serialize};

/// Per-camp customer rating; hidden until moderation approves it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub camp_id: i64,
    pub customer_name: String,
    pub email: String,
    /// 1 to 5
    pub rating: i32,
    pub comment: String,
    pub approved: bool,
    pub created_at: i64,
}

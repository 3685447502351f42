//! Blog post model

use serde::{Deserialize, Serialize};

/// Full blog post
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    pub images: Vec<String>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    pub published: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Listing card without the full body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct BlogSummary {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    pub tags: Vec<String>,
    pub created_at: i64,
}

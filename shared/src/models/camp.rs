//! Camp catalog model
//!
//! Read-mostly from the booking core's point of view. Prices are
//! point-in-time values that get snapshotted into bookings at creation.

use serde::{Deserialize, Serialize};

/// One step of a camp's day plan
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItineraryItem {
    pub time: String,
    pub activity: String,
}

/// Camp-specific FAQ entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// Camp entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Camp {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub location: String,
    /// One of `lakeside`, `hilltop`, `riverside`
    pub location_type: String,
    pub description: String,
    /// Per-adult price in whole rupees
    pub price_adult: i64,
    /// Per-child price in whole rupees
    pub price_child: i64,
    pub images: Vec<String>,
    pub inclusions: Vec<String>,
    pub itinerary: Vec<ItineraryItem>,
    pub faqs: Vec<Faq>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_embed_url: Option<String>,
    pub rating: f64,
    pub review_count: i32,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_time_to_visit: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

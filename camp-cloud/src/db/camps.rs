//! Camp catalog queries

use chrono::NaiveDate;
use shared::models::camp::Camp;
use sqlx::PgPool;

#[derive(sqlx::FromRow)]
struct CampRow {
    id: i64,
    slug: String,
    title: String,
    location: String,
    location_type: String,
    description: String,
    price_adult: i64,
    price_child: i64,
    images: Vec<String>,
    inclusions: Vec<String>,
    itinerary: serde_json::Value,
    faqs: serde_json::Value,
    map_embed_url: Option<String>,
    rating: f64,
    review_count: i32,
    tags: Vec<String>,
    best_time_to_visit: Option<String>,
    created_at: i64,
    updated_at: i64,
}

impl From<CampRow> for Camp {
    fn from(r: CampRow) -> Self {
        Camp {
            id: r.id,
            slug: r.slug,
            title: r.title,
            location: r.location,
            location_type: r.location_type,
            description: r.description,
            price_adult: r.price_adult,
            price_child: r.price_child,
            images: r.images,
            inclusions: r.inclusions,
            itinerary: serde_json::from_value(r.itinerary).unwrap_or_default(),
            faqs: serde_json::from_value(r.faqs).unwrap_or_default(),
            map_embed_url: r.map_embed_url,
            rating: r.rating,
            review_count: r.review_count,
            tags: r.tags,
            best_time_to_visit: r.best_time_to_visit,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// Optional listing filters; `None` means "don't filter on this"
#[derive(Debug, Default)]
pub struct CampFilter {
    pub location_type: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub tags: Option<Vec<String>>,
}

pub async fn list(pool: &PgPool, filter: &CampFilter) -> Result<Vec<Camp>, sqlx::Error> {
    let rows: Vec<CampRow> = sqlx::query_as(
        "SELECT * FROM camps
         WHERE ($1::text IS NULL OR location_type = $1)
           AND ($2::bigint IS NULL OR price_adult >= $2)
           AND ($3::bigint IS NULL OR price_adult <= $3)
           AND ($4::text[] IS NULL OR tags && $4)
         ORDER BY created_at DESC",
    )
    .bind(&filter.location_type)
    .bind(filter.min_price)
    .bind(filter.max_price)
    .bind(&filter.tags)
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(Camp::from).collect())
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Camp>, sqlx::Error> {
    let row: Option<CampRow> = sqlx::query_as("SELECT * FROM camps WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(Camp::from))
}

pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Camp>, sqlx::Error> {
    let row: Option<CampRow> = sqlx::query_as("SELECT * FROM camps WHERE slug = $1")
        .bind(slug)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(Camp::from))
}

/// Outcome of an availability reservation attempt
pub enum SlotReservation {
    /// A calendar row existed and one slot was taken
    Reserved,
    /// A calendar row existed but every slot is booked
    Full,
    /// No calendar row for this date; the camp takes bookings uncapped
    NoCalendar,
}

/// Reserve one slot for the date when a calendar row exists.
///
/// The conditional increment is the capacity check; two concurrent requests
/// for the last slot cannot both succeed.
pub async fn try_reserve_slot(
    pool: &PgPool,
    camp_id: i64,
    date: NaiveDate,
) -> Result<SlotReservation, sqlx::Error> {
    let calendar: Option<(i32,)> =
        sqlx::query_as("SELECT slots FROM camp_availability WHERE camp_id = $1 AND date = $2")
            .bind(camp_id)
            .bind(date)
            .fetch_optional(pool)
            .await?;
    if calendar.is_none() {
        return Ok(SlotReservation::NoCalendar);
    }

    let updated = sqlx::query(
        "UPDATE camp_availability SET booked = booked + 1
         WHERE camp_id = $1 AND date = $2 AND booked < slots",
    )
    .bind(camp_id)
    .bind(date)
    .execute(pool)
    .await?
    .rows_affected();

    Ok(if updated == 1 {
        SlotReservation::Reserved
    } else {
        SlotReservation::Full
    })
}

/// Give back a reserved slot (booking cancelled). No-op without a calendar
/// row.
pub async fn release_slot(pool: &PgPool, camp_id: i64, date: NaiveDate) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE camp_availability SET booked = GREATEST(booked - 1, 0)
         WHERE camp_id = $1 AND date = $2",
    )
    .bind(camp_id)
    .bind(date)
    .execute(pool)
    .await?;
    Ok(())
}

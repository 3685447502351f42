//! Blog queries

use shared::models::blog::{Blog, BlogSummary};
use sqlx::PgPool;

/// Published posts, newest first, without bodies
pub async fn list_published(pool: &PgPool) -> Result<Vec<BlogSummary>, sqlx::Error> {
    sqlx::query_as(
        "SELECT id, slug, title, excerpt, author, featured_image, tags, created_at
         FROM blogs
         WHERE published = TRUE
         ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await
}

pub async fn find_published_by_slug(
    pool: &PgPool,
    slug: &str,
) -> Result<Option<Blog>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM blogs WHERE slug = $1 AND published = TRUE")
        .bind(slug)
        .fetch_optional(pool)
        .await
}

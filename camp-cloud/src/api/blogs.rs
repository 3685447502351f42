//! Blog endpoints
//!
//! GET /api/blogs        — published posts, newest first
//! GET /api/blogs/{slug} — full post

use axum::Json;
use axum::extract::{Path, State};
use shared::error::{ApiResponse, AppError, ErrorCode};
use shared::models::blog::{Blog, BlogSummary};

use crate::db;
use crate::error::ServiceError;
use crate::state::AppState;

type ApiResult<T> = Result<Json<ApiResponse<T>>, ServiceError>;

pub async fn list_blogs(State(state): State<AppState>) -> ApiResult<Vec<BlogSummary>> {
    let blogs = db::blogs::list_published(&state.pool).await?;
    Ok(Json(ApiResponse::success(blogs)))
}

pub async fn blog_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Blog> {
    let blog = db::blogs::find_published_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::BlogNotFound))?;
    Ok(Json(ApiResponse::success(blog)))
}

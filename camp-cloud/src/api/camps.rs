//! Camp catalog endpoints
//!
//! GET /api/camps        — filterable listing
//! GET /api/camps/{slug} — camp detail with approved reviews

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};
use shared::error::{ApiResponse, AppError, ErrorCode};
use shared::models::camp::Camp;
use shared::models::review::Review;

use crate::db;
use crate::error::ServiceError;
use crate::state::AppState;

type ApiResult<T> = Result<Json<ApiResponse<T>>, ServiceError>;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampListQuery {
    /// Location type filter: lakeside | hilltop | riverside
    pub location: Option<String>,
    /// Lower bound on the per-adult price
    pub min_price: Option<i64>,
    /// Upper bound on the per-adult price
    pub max_price: Option<i64>,
    /// Comma-separated tag list; matches camps carrying any of them
    pub tags: Option<String>,
}

pub async fn list_camps(
    State(state): State<AppState>,
    Query(q): Query<CampListQuery>,
) -> ApiResult<Vec<Camp>> {
    let filter = db::camps::CampFilter {
        location_type: q.location,
        min_price: q.min_price,
        max_price: q.max_price,
        tags: q.tags.map(|t| {
            t.split(',')
                .map(|s| s.trim().to_owned())
                .filter(|s| !s.is_empty())
                .collect()
        }),
    };

    let camps = db::camps::list(&state.pool, &filter).await?;
    Ok(Json(ApiResponse::success(camps)))
}

#[derive(Serialize)]
pub struct CampDetail {
    pub camp: Camp,
    pub reviews: Vec<Review>,
}

pub async fn camp_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<CampDetail> {
    let camp = db::camps::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::CampNotFound))?;

    let reviews = db::reviews::list_approved_for_camp(&state.pool, camp.id, 10).await?;

    Ok(Json(ApiResponse::success(CampDetail { camp, reviews })))
}

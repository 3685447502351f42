//! Weather endpoint — OpenWeather read-through
//!
//! GET /api/weather?location= — current conditions for a camp location.
//! Degrades to a null payload when the API key is missing or the upstream
//! call fails; the widget on the camp page is strictly optional.

use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use shared::error::ApiResponse;

use crate::error::ServiceError;
use crate::state::AppState;

type ApiResult<T> = Result<Json<ApiResponse<T>>, ServiceError>;

#[derive(Deserialize)]
pub struct WeatherQuery {
    pub location: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Weather {
    pub temp: i32,
    pub feels_like: i32,
    pub humidity: i32,
    pub description: String,
    pub icon: String,
}

pub async fn current_weather(
    State(state): State<AppState>,
    Query(q): Query<WeatherQuery>,
) -> ApiResult<Option<Weather>> {
    let Some(ref api_key) = state.openweather_api_key else {
        return Ok(Json(ApiResponse::success(None)));
    };

    let url = format!(
        "https://api.openweathermap.org/data/2.5/weather?q={},IN&appid={}&units=metric",
        q.location, api_key
    );

    let data: serde_json::Value = match state.http.get(&url).send().await {
        Ok(resp) if resp.status().is_success() => match resp.json().await {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(location = %q.location, error = %e, "Weather response unparseable");
                return Ok(Json(ApiResponse::success(None)));
            }
        },
        Ok(resp) => {
            tracing::warn!(location = %q.location, status = %resp.status(), "Weather lookup rejected");
            return Ok(Json(ApiResponse::success(None)));
        }
        Err(e) => {
            tracing::warn!(location = %q.location, error = %e, "Weather lookup failed");
            return Ok(Json(ApiResponse::success(None)));
        }
    };

    let weather = Weather {
        temp: data["main"]["temp"].as_f64().unwrap_or(0.0).round() as i32,
        feels_like: data["main"]["feels_like"].as_f64().unwrap_or(0.0).round() as i32,
        humidity: data["main"]["humidity"].as_i64().unwrap_or(0) as i32,
        description: data["weather"][0]["description"]
            .as_str()
            .unwrap_or("")
            .to_string(),
        icon: data["weather"][0]["icon"].as_str().unwrap_or("").to_string(),
    };

    Ok(Json(ApiResponse::success(Some(weather))))
}

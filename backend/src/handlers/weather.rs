//! HTTP handler for current weather

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::{AppError, AppResult};
use crate::AppState;
use crate::models::WeatherReading;
use shared::types::{ApiResponse, Coordinates};
use shared::validation::validate_coordinates;

fn parse_degrees(field: &str, raw: &str) -> AppResult<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| AppError::validation(field, format!("{} must be a number", field)))
}

/// Current weather (or the mock reading) at a coordinate pair
pub async fn get_weather(
    State(state): State<AppState>,
    Path((lat, lon)): Path<(String, String)>,
) -> AppResult<Json<ApiResponse<WeatherReading>>> {
    let latitude = parse_degrees("latitude", &lat)?;
    let longitude = parse_degrees("longitude", &lon)?;

    validate_coordinates(latitude, longitude)
        .map_err(|message| AppError::validation("coordinates", message))?;

    let reading = state
        .weather
        .get_weather(Coordinates::new(latitude, longitude))
        .await;

    Ok(Json(ApiResponse::with_message(
        reading,
        "Weather data retrieved successfully",
    )))
}

//! HTTP handler for location lookup

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::{AppError, AppResult};
use crate::AppState;
use crate::models::GeocodingResult;
use shared::types::ApiResponse;

/// Coordinates and display name for a location
pub async fn geocode_location(
    State(state): State<AppState>,
    Path(location): Path<String>,
) -> AppResult<Json<ApiResponse<GeocodingResult>>> {
    let info = state
        .geocoder
        .get_location_info(&location)
        .await
        .ok_or_else(|| AppError::LocationNotFound(location.clone()))?;

    Ok(Json(ApiResponse::with_message(
        info,
        "Location geocoded successfully",
    )))
}

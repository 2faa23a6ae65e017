//! Prediction HTTP handlers

use std::collections::BTreeMap;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::error::AppResult;
use crate::AppState;
use crate::models::{BatchPredictionRequest, PredictionRequest, PredictionResponse};
use shared::types::{ApiResponse, DisasterType};

/// Predict one disaster type for a location
pub async fn predict_disaster(
    State(state): State<AppState>,
    payload: Result<Json<PredictionRequest>, JsonRejection>,
) -> AppResult<Json<ApiResponse<PredictionResponse>>> {
    let Json(request) = payload?;
    let prediction = state.predictions.predict(&request).await?;
    let message = format!(
        "Prediction completed successfully for {}",
        request.disaster_type
    );
    Ok(Json(ApiResponse::with_message(prediction, message)))
}

/// Predict every disaster type for a location
pub async fn predict_all_disasters(
    State(state): State<AppState>,
    payload: Result<Json<BatchPredictionRequest>, JsonRejection>,
) -> AppResult<Json<ApiResponse<BTreeMap<DisasterType, PredictionResponse>>>> {
    let Json(request) = payload?;
    let predictions = state.predictions.predict_all(&request).await?;
    Ok(Json(ApiResponse::with_message(
        predictions,
        "Predictions completed successfully",
    )))
}

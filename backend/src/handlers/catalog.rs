//! Static catalog endpoints: available models and reference statistics

use axum::Json;

use crate::models::GlobalStatsData;
use shared::types::{ApiResponse, PredictionModel};

pub async fn list_models() -> Json<ApiResponse<Vec<PredictionModel>>> {
    Json(ApiResponse::with_message(
        PredictionModel::ALL.to_vec(),
        "Available models retrieved successfully",
    ))
}

pub async fn get_global_stats() -> Json<ApiResponse<GlobalStatsData>> {
    Json(ApiResponse::with_message(
        GlobalStatsData::REFERENCE,
        "Global statistics retrieved successfully",
    ))
}

//! Service info and health check handlers

use axum::{extract::State, http::Uri, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::AppError;
use crate::AppState;
use shared::types::ApiResponse;

#[derive(Serialize)]
pub struct ApiInfo {
    pub message: String,
    pub version: String,
    pub description: String,
    pub health: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct ServicesStatus {
    pub weather_api: String,
    pub geocoding_service: String,
    pub prediction_service: String,
}

#[derive(Serialize)]
pub struct DetailedHealth {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub services: ServicesStatus,
}

/// Root endpoint with API information
pub async fn root() -> Json<ApiInfo> {
    Json(ApiInfo {
        message: "Natural Disaster Prediction API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: "Weather-driven natural disaster probability scoring".to_string(),
        health: "/api/health".to_string(),
    })
}

/// Liveness check; never touches upstream services
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
    })
}

fn status_label(ok: bool) -> String {
    let label = if ok { "healthy" } else { "unhealthy" };
    label.to_string()
}

/// Probe the weather provider and geocoder
pub async fn api_health_check(State(state): State<AppState>) -> Json<ApiResponse<DetailedHealth>> {
    let (weather_ok, geocoding_ok) = tokio::join!(
        state.weather.test_connection(),
        state.geocoder.test_service()
    );
    let overall = weather_ok && geocoding_ok;

    let mut response = ApiResponse::with_message(
        DetailedHealth {
            status: if overall { "healthy" } else { "degraded" }.to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            services: ServicesStatus {
                weather_api: status_label(weather_ok),
                geocoding_service: status_label(geocoding_ok),
                prediction_service: status_label(true),
            },
        },
        "Health check completed",
    );
    response.success = overall;

    Json(response)
}

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("Route {}", uri.path()))
}

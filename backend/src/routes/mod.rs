//! Route definitions for the Disaster Prediction API

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes, mounted under `/api`
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::api_health_check))
        .nest("/predict", prediction_routes())
        .route("/weather/:lat/:lon", get(handlers::get_weather))
        .route("/geocode/:location", get(handlers::geocode_location))
        .route("/models", get(handlers::list_models))
        .route("/stats", get(handlers::get_global_stats))
}

/// Prediction routes
fn prediction_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::predict_disaster))
        .route("/all", post(handlers::predict_all_disasters))
}

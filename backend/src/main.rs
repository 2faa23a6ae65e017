//! Natural Disaster Prediction API - Backend Server
//!
//! Resolves a location, fetches its current weather and scores the
//! probability of tornadoes, earthquakes, wildfires and floods.

use axum::{
    http::{HeaderName, HeaderValue},
    middleware::from_fn,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod external;
mod handlers;
mod middleware;
mod models;
mod routes;
mod services;

pub use config::Config;
use services::{GeocodingService, PredictionService, WeatherService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub weather: WeatherService,
    pub geocoder: GeocodingService,
    pub predictions: PredictionService,
}

impl AppState {
    /// Build every service from configuration
    pub fn from_config(config: Config) -> error::AppResult<Self> {
        let weather = WeatherService::new(&config.weather)?;
        let geocoder = GeocodingService::new(&config.geocoding)?;
        let predictions =
            PredictionService::new(geocoder.clone(), weather.clone(), &config.prediction);

        Ok(Self {
            config: Arc::new(config),
            weather,
            geocoder,
            predictions,
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dp_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Natural Disaster Prediction API");
    tracing::info!("Environment: {}", config.environment);

    let addr = config.bind_address();

    // Create application state
    let state = AppState::from_config(config)?;

    // Report upstream status once at startup
    let (weather_ok, geocoding_ok) = tokio::join!(
        state.weather.test_connection(),
        state.geocoder.test_service()
    );
    if !state.weather.is_live() {
        tracing::warn!("Serving mock weather data; set DP_WEATHER__API_KEY for live conditions");
    }
    tracing::info!("Weather API: {}", if weather_ok { "OK" } else { "FAILED" });
    tracing::info!("Geocoding Service: {}", if geocoding_ok { "OK" } else { "FAILED" });

    // Build application
    let app = create_app(state);

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// CORS layer from the configured origin list; `*` allows any origin
fn cors_layer(config: &config::CorsConfig) -> CorsLayer {
    // Browsers may only read x-process-time when it is exposed
    let base = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([HeaderName::from_static(middleware::PROCESS_TIME_HEADER)]);

    if config.allowed_origins.iter().any(|origin| origin == "*") {
        return base.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    base.allow_origin(origins)
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .nest("/api", routes::api_routes())
        .fallback(handlers::not_found)
        .layer(from_fn(middleware::request_timing))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

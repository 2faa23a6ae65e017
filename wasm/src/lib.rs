//! WebAssembly module for the Natural Disaster Prediction Platform
//!
//! Provides client-side computation for:
//! - Disaster probability scoring
//! - Factor impact breakdowns and key factors
//! - 30-day forecast simulation
//! - Form validation before a request is sent
//!
//! Values cross the boundary as JSON strings so the browser sees exactly
//! the shapes the API returns.

use chrono::NaiveDate;
use wasm_bindgen::prelude::*;

use shared::scoring::{self, RandomNoise};

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&"disaster prediction engine loaded".into());
}

fn parse_disaster(disaster: &str) -> Result<DisasterType, String> {
    disaster.parse::<DisasterType>().map_err(|e| e.to_string())
}

fn parse_reading(reading_json: &str) -> Result<WeatherReading, String> {
    serde_json::from_str(reading_json).map_err(|e| format!("Invalid reading JSON: {}", e))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization failed: {}", e))
}

/// Seed from `Math.random` when the caller does not pin one
fn seed_or_random(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| (js_sys::Math::random() * u32::MAX as f64) as u64)
}

fn score_json(disaster: &str, reading_json: &str, seed: u64) -> Result<String, String> {
    let disaster = parse_disaster(disaster)?;
    let reading = parse_reading(reading_json)?;
    let result = scoring::score_disaster(disaster, &reading, &mut RandomNoise::seeded(seed));
    to_json(&result)
}

fn impacts_json(disaster: &str, reading_json: &str) -> Result<String, String> {
    let disaster = parse_disaster(disaster)?;
    let reading = parse_reading(reading_json)?;
    to_json(&scoring::factor_impacts(disaster, &reading))
}

fn key_factors_json(disaster: &str, reading_json: &str) -> Result<String, String> {
    let disaster = parse_disaster(disaster)?;
    let reading = parse_reading(reading_json)?;
    to_json(&scoring::key_factors(disaster, &reading.sanitized()))
}

fn forecast_json(
    disaster: &str,
    reading_json: &str,
    start_date: &str,
    seed: u64,
) -> Result<String, String> {
    let disaster = parse_disaster(disaster)?;
    let reading = parse_reading(reading_json)?;
    let start = NaiveDate::parse_from_str(start_date, "%Y-%m-%d")
        .map_err(|e| format!("Invalid start date '{}': {}", start_date, e))?;

    let days = scoring::forecast(disaster, &reading, start, &mut RandomNoise::seeded(seed));
    to_json(&days)
}

/// Score a reading: `{probability, factor_impacts, key_factors}` as JSON
#[wasm_bindgen]
pub fn score_disaster(
    disaster: &str,
    reading_json: &str,
    seed: Option<u64>,
) -> Result<String, JsValue> {
    score_json(disaster, reading_json, seed_or_random(seed)).map_err(|e| JsValue::from_str(&e))
}

/// Percentage impact of each factor as JSON
#[wasm_bindgen]
pub fn factor_impacts(disaster: &str, reading_json: &str) -> Result<String, JsValue> {
    impacts_json(disaster, reading_json).map_err(|e| JsValue::from_str(&e))
}

/// Triggered key-factor labels as a JSON array
#[wasm_bindgen]
pub fn key_factors(disaster: &str, reading_json: &str) -> Result<String, JsValue> {
    key_factors_json(disaster, reading_json).map_err(|e| JsValue::from_str(&e))
}

/// 30-day forecast starting at `start_date` (YYYY-MM-DD) as JSON
#[wasm_bindgen]
pub fn simulate_forecast(
    disaster: &str,
    reading_json: &str,
    start_date: &str,
    seed: Option<u64>,
) -> Result<String, JsValue> {
    forecast_json(disaster, reading_json, start_date, seed_or_random(seed))
        .map_err(|e| JsValue::from_str(&e))
}

/// The reading the API substitutes when live weather is unavailable
#[wasm_bindgen]
pub fn mock_weather_reading() -> String {
    serde_json::to_string(&WeatherReading::mock(None)).unwrap_or_default()
}

/// Names of every supported disaster type
#[wasm_bindgen]
pub fn disaster_types() -> js_sys::Array {
    DisasterType::ALL
        .iter()
        .map(|d| JsValue::from_str(d.as_str()))
        .collect()
}

/// Validate a location before submitting a prediction request
#[wasm_bindgen]
pub fn is_valid_location(location: &str) -> bool {
    validate_location(location).is_ok()
}

/// Validate a coordinate pair
#[wasm_bindgen]
pub fn is_valid_coordinates(latitude: f64, longitude: f64) -> bool {
    validate_coordinates(latitude, longitude).is_ok()
}

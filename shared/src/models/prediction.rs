//! Prediction request and response models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{FactorImpacts, ForecastDay, WeatherReading};
use crate::types::{Coordinates, DisasterType, PredictionModel};
use crate::validation::validate_location_text;

/// Request for a single disaster prediction
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PredictionRequest {
    /// City and state, e.g. "Oklahoma City, OK"
    #[validate(custom = "validate_location_text")]
    pub location: String,
    #[serde(default)]
    pub model: PredictionModel,
    pub disaster_type: DisasterType,
}

/// Request for predictions of every disaster type at one location
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BatchPredictionRequest {
    #[validate(custom = "validate_location_text")]
    pub location: String,
    #[serde(default)]
    pub model: PredictionModel,
}

/// Context describing how a prediction was produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionMetadata {
    pub request_id: String,
    pub location: String,
    pub coordinates: Coordinates,
    pub model: PredictionModel,
    pub disaster_type: DisasterType,
    pub timestamp: DateTime<Utc>,
    pub weather_data: WeatherReading,
}

/// Full prediction for one disaster type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub probability: f64,
    pub forecast: Vec<ForecastDay>,
    pub factors: FactorImpacts,
    pub key_factors: Vec<String>,
    pub metadata: PredictionMetadata,
}

/// Resolved location returned by the geocoder
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeocodingResult {
    pub lat: f64,
    pub lon: f64,
    pub display_name: String,
}

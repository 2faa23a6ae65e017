//! Validation utilities for the Natural Disaster Prediction Platform
//!
//! Checks run before any network call or scoring. Scoring itself never
//! rejects a reading; these are for request handling and client-side forms.

use rust_decimal::Decimal;
use validator::ValidationError;

use crate::models::{FactorImpacts, WeatherReading};

/// Minimum length of a location query after trimming
pub const MIN_LOCATION_LEN: usize = 3;

// ============================================================================
// Location Validations
// ============================================================================

/// Validate a free-text location such as "Wichita, KS"
pub fn validate_location(location: &str) -> Result<(), &'static str> {
    let trimmed = location.trim();
    if trimmed.is_empty() {
        return Err("Location is required");
    }
    if trimmed.chars().count() < MIN_LOCATION_LEN {
        return Err("Location must be at least 3 characters");
    }
    if !trimmed.chars().any(char::is_alphabetic) {
        return Err("Location must contain letters");
    }
    Ok(())
}

/// Adapter so `validate_location` can be used from `#[derive(Validate)]`
pub fn validate_location_text(location: &str) -> Result<(), ValidationError> {
    validate_location(location).map_err(|message| {
        let mut error = ValidationError::new("location");
        error.message = Some(message.into());
        error
    })
}

/// Validate latitude and longitude ranges
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), &'static str> {
    if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
        return Err("Latitude must be between -90 and 90");
    }
    if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}

// ============================================================================
// Weather & Score Validations
// ============================================================================

/// Validate that a reading is physically plausible
pub fn validate_weather_reading(reading: &WeatherReading) -> Result<(), &'static str> {
    let values = [
        reading.temperature_kelvin,
        reading.humidity_percent,
        reading.pressure_hpa,
        reading.wind_speed_mps,
    ];
    if values.iter().any(|v| !v.is_finite()) {
        return Err("Weather values must be finite numbers");
    }
    if reading.temperature_kelvin < 0.0 {
        return Err("Temperature cannot be below absolute zero");
    }
    if !(0.0..=100.0).contains(&reading.humidity_percent) {
        return Err("Humidity must be between 0 and 100%");
    }
    if reading.pressure_hpa <= 0.0 {
        return Err("Pressure must be positive");
    }
    if reading.wind_speed_mps < 0.0 {
        return Err("Wind speed cannot be negative");
    }
    if let Some(coordinates) = reading.coordinates {
        validate_coordinates(coordinates.latitude, coordinates.longitude)?;
    }
    Ok(())
}

/// Check a probability lies in [0, 1]
pub fn is_valid_probability(probability: f64) -> bool {
    (0.0..=1.0).contains(&probability)
}

/// Validate that factor impacts are non-negative and sum to exactly 100
pub fn validate_factor_impacts(impacts: &FactorImpacts) -> Result<(), &'static str> {
    let entries = impacts.entries();
    if entries.is_empty() {
        return Err("Factor impacts must contain at least one factor");
    }
    if entries.iter().any(|(_, v)| v.is_sign_negative() && !v.is_zero()) {
        return Err("Factor impacts cannot be negative");
    }
    if impacts.total() != Decimal::ONE_HUNDRED {
        return Err("Factor impacts must sum to 100%");
    }
    Ok(())
}

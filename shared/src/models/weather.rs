//! Weather data models

use serde::{Deserialize, Serialize};

use crate::types::Coordinates;

/// Offset between the Kelvin and Celsius scales
pub const KELVIN_OFFSET: f64 = 273.15;

/// Mock reading used whenever live weather cannot be fetched
pub const MOCK_TEMPERATURE_KELVIN: f64 = 293.15;
pub const MOCK_HUMIDITY_PERCENT: f64 = 65.0;
pub const MOCK_PRESSURE_HPA: f64 = 1013.0;
pub const MOCK_WIND_SPEED_MPS: f64 = 5.5;
pub const MOCK_WIND_DEG: f64 = 180.0;

/// A single weather observation fed into the scoring engine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherReading {
    pub temperature_kelvin: f64,
    pub humidity_percent: f64,
    pub pressure_hpa: f64,
    pub wind_speed_mps: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_deg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub is_mock: bool,
    /// Provider extras shown on the dashboard; never read by scoring
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<WeatherConditions>,
}

/// Sky and visibility details reported alongside a reading
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct WeatherConditions {
    pub cloud_coverage_percent: Option<u8>,
    pub visibility_meters: Option<u32>,
    pub rain_1h_mm: Option<f64>,
    pub sunrise: Option<i64>,
    pub sunset: Option<i64>,
    pub condition: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
}

impl WeatherReading {
    /// Build a reading from the four scored variables
    pub fn new(
        temperature_kelvin: f64,
        humidity_percent: f64,
        pressure_hpa: f64,
        wind_speed_mps: f64,
    ) -> Self {
        Self {
            temperature_kelvin,
            humidity_percent,
            pressure_hpa,
            wind_speed_mps,
            wind_deg: None,
            coordinates: None,
            is_mock: false,
            conditions: None,
        }
    }

    /// The documented substitute for an unavailable weather provider
    pub fn mock(coordinates: Option<Coordinates>) -> Self {
        Self {
            temperature_kelvin: MOCK_TEMPERATURE_KELVIN,
            humidity_percent: MOCK_HUMIDITY_PERCENT,
            pressure_hpa: MOCK_PRESSURE_HPA,
            wind_speed_mps: MOCK_WIND_SPEED_MPS,
            wind_deg: Some(MOCK_WIND_DEG),
            coordinates,
            is_mock: true,
            conditions: Some(WeatherConditions {
                cloud_coverage_percent: Some(40),
                visibility_meters: Some(10_000),
                rain_1h_mm: None,
                sunrise: Some(1_622_520_000),
                sunset: Some(1_622_574_000),
                condition: Some("Clear".to_string()),
                description: Some("clear sky".to_string()),
                icon: Some("01d".to_string()),
            }),
        }
    }

    pub fn with_coordinates(mut self, coordinates: Coordinates) -> Self {
        self.coordinates = Some(coordinates);
        self
    }

    pub fn temperature_celsius(&self) -> f64 {
        self.temperature_kelvin - KELVIN_OFFSET
    }

    /// Replace non-finite fields with mock values and pull humidity and wind
    /// back into their physical domains.
    pub fn sanitized(&self) -> Self {
        let finite_or = |value: f64, default: f64| if value.is_finite() { value } else { default };

        let mut reading = self.clone();
        reading.temperature_kelvin = finite_or(self.temperature_kelvin, MOCK_TEMPERATURE_KELVIN);
        reading.humidity_percent =
            finite_or(self.humidity_percent, MOCK_HUMIDITY_PERCENT).clamp(0.0, 100.0);
        reading.pressure_hpa = finite_or(self.pressure_hpa, MOCK_PRESSURE_HPA);
        reading.wind_speed_mps = finite_or(self.wind_speed_mps, MOCK_WIND_SPEED_MPS).max(0.0);
        reading.wind_deg = self.wind_deg.filter(|d| d.is_finite());
        reading.coordinates = self
            .coordinates
            .filter(|c| c.latitude.is_finite() && c.longitude.is_finite());
        reading
    }
}

//! Weather API client for fetching weather data
//!
//! Integrates with the OpenWeatherMap current-conditions endpoint

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::models::{WeatherConditions, WeatherReading, KELVIN_OFFSET};
use shared::types::Coordinates;

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// OpenWeatherMap API response for current weather
#[derive(Debug, Deserialize)]
struct OWMCurrentResponse {
    coord: OWMCoord,
    #[serde(default)]
    weather: Vec<OWMWeather>,
    main: OWMMain,
    visibility: Option<u32>,
    wind: OWMWind,
    clouds: Option<OWMClouds>,
    rain: Option<OWMRain>,
    sys: Option<OWMSys>,
}

#[derive(Debug, Deserialize)]
struct OWMCoord {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OWMWeather {
    main: String,
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OWMMain {
    temp: f64,
    pressure: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OWMWind {
    speed: f64,
    deg: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OWMClouds {
    all: u8,
}

#[derive(Debug, Deserialize)]
struct OWMRain {
    #[serde(rename = "1h")]
    one_hour: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OWMSys {
    sunrise: Option<i64>,
    sunset: Option<i64>,
}

impl WeatherClient {
    /// Create a new WeatherClient
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("Weather HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch current weather conditions by GPS coordinates
    pub async fn get_current_weather(&self, coordinates: Coordinates) -> AppResult<WeatherReading> {
        let url = format!("{}/weather", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", coordinates.latitude.to_string()),
                ("lon", coordinates.longitude.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "metric".to_string()),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::ExternalService("Weather API request timed out".to_string())
                } else {
                    AppError::ExternalService(format!("Weather API request failed: {}", e))
                }
            })?;

        match response.status() {
            status if status.is_success() => {}
            StatusCode::UNAUTHORIZED => {
                return Err(AppError::ExternalService(
                    "Invalid OpenWeatherMap API key".to_string(),
                ))
            }
            StatusCode::NOT_FOUND => {
                return Err(AppError::ExternalService(
                    "Weather API has no data for these coordinates".to_string(),
                ))
            }
            status => {
                let body = response.text().await.unwrap_or_default();
                return Err(AppError::ExternalService(format!(
                    "Weather API error: {} - {}",
                    status, body
                )));
            }
        }

        let data: OWMCurrentResponse = response
            .json()
            .await
            .map_err(|e| AppError::ExternalService(format!("Failed to parse weather response: {}", e)))?;

        Ok(convert_current_response(data))
    }

    /// Probe the API with a known location
    pub async fn ping(&self) -> AppResult<()> {
        self.get_current_weather(Coordinates::new(40.7128, -74.0060))
            .await
            .map(|_| ())
    }
}

/// Convert OpenWeatherMap current response (metric units) to a reading in Kelvin
fn convert_current_response(data: OWMCurrentResponse) -> WeatherReading {
    let weather = data.weather.first();

    WeatherReading {
        temperature_kelvin: data.main.temp + KELVIN_OFFSET,
        humidity_percent: data.main.humidity,
        pressure_hpa: data.main.pressure,
        wind_speed_mps: data.wind.speed,
        wind_deg: data.wind.deg,
        coordinates: Some(Coordinates::new(data.coord.lat, data.coord.lon)),
        is_mock: false,
        conditions: Some(WeatherConditions {
            cloud_coverage_percent: data.clouds.map(|c| c.all),
            visibility_meters: Some(data.visibility.unwrap_or(10_000)),
            rain_1h_mm: data.rain.and_then(|r| r.one_hour),
            sunrise: data.sys.as_ref().and_then(|s| s.sunrise),
            sunset: data.sys.as_ref().and_then(|s| s.sunset),
            condition: weather.map(|w| w.main.clone()),
            description: weather.map(|w| w.description.clone()),
            icon: weather.map(|w| w.icon.clone()),
        }),
    }
}

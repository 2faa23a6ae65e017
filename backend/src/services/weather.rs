//! Weather service with mock fallback
//!
//! Weather is never an error for callers: any provider failure degrades to
//! the documented mock reading at the requested coordinates.

use std::time::Duration;

use crate::config::WeatherConfig;
use crate::error::AppResult;
use crate::external::WeatherClient;
use crate::models::WeatherReading;
use shared::types::Coordinates;

/// Weather service for fetching current conditions
#[derive(Clone)]
pub struct WeatherService {
    weather_client: Option<WeatherClient>,
}

impl WeatherService {
    /// Create a WeatherService; without a usable API key it serves mock data
    pub fn new(config: &WeatherConfig) -> AppResult<Self> {
        let weather_client = match config.usable_api_key() {
            Some(key) => Some(WeatherClient::new(
                key.to_string(),
                config.api_endpoint.clone(),
                Duration::from_secs(config.timeout_secs),
            )?),
            None => {
                tracing::warn!("OpenWeatherMap API key not configured, using mock data");
                None
            }
        };

        Ok(Self { weather_client })
    }

    /// Whether live weather can be fetched at all
    pub fn is_live(&self) -> bool {
        self.weather_client.is_some()
    }

    /// Current weather at `coordinates`, or the mock reading on any failure
    pub async fn get_weather(&self, coordinates: Coordinates) -> WeatherReading {
        let Some(client) = &self.weather_client else {
            tracing::info!("Using mock weather data");
            return WeatherReading::mock(Some(coordinates));
        };

        tracing::info!(
            "Fetching weather data for coordinates: {}, {}",
            coordinates.latitude,
            coordinates.longitude
        );

        match client.get_current_weather(coordinates).await {
            Ok(reading) => reading,
            Err(e) => {
                tracing::error!("Weather fetch failed, using mock data: {}", e);
                WeatherReading::mock(Some(coordinates))
            }
        }
    }

    /// Probe the provider; false when no key is configured
    pub async fn test_connection(&self) -> bool {
        let Some(client) = &self.weather_client else {
            tracing::warn!("OpenWeatherMap API key not configured");
            return false;
        };

        match client.ping().await {
            Ok(()) => {
                tracing::info!("OpenWeatherMap API connection successful");
                true
            }
            Err(e) => {
                tracing::error!("OpenWeatherMap API test failed: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_without_key_serves_mock_at_requested_coordinates() {
        let service = WeatherService::new(&WeatherConfig::default()).unwrap();
        assert!(!service.is_live());

        let coordinates = Coordinates::new(36.154, -95.9928);
        let reading = tokio_test::block_on(service.get_weather(coordinates));

        assert!(reading.is_mock);
        assert_eq!(reading.coordinates, Some(coordinates));
        assert_eq!(reading.pressure_hpa, 1013.0);
        assert!(!tokio_test::block_on(service.test_connection()));
    }

    #[tokio::test]
    async fn test_unreachable_provider_falls_back_to_mock() {
        let config = WeatherConfig {
            api_endpoint: "http://127.0.0.1:9".to_string(),
            api_key: Some("test-key".to_string()),
            timeout_secs: 1,
        };
        let service = WeatherService::new(&config).unwrap();
        assert!(service.is_live());

        let reading = service.get_weather(Coordinates::new(0.0, 0.0)).await;
        assert!(reading.is_mock);
    }
}

//! Prediction orchestration: geocode, fetch weather, score, forecast

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;
use validator::Validate;

use crate::config::PredictionConfig;
use crate::error::{AppError, AppResult};
use crate::services::{GeocodingService, WeatherService};
use crate::models::{
    BatchPredictionRequest, PredictionMetadata, PredictionRequest, PredictionResponse,
    WeatherReading,
};
use shared::scoring::{self, NoiseSource, RandomNoise};
use shared::types::{Coordinates, DisasterType, PredictionModel};

/// Range of the placeholder models' headline probability
const BASELINE_RANGE: (f64, f64) = (0.2, 0.8);

/// Service producing disaster predictions for free-text locations
#[derive(Clone)]
pub struct PredictionService {
    geocoder: GeocodingService,
    weather: WeatherService,
    seed: Option<u64>,
}

/// A location resolved to coordinates and current weather
struct Site {
    coordinates: Coordinates,
    reading: WeatherReading,
}

impl PredictionService {
    pub fn new(geocoder: GeocodingService, weather: WeatherService, config: &PredictionConfig) -> Self {
        if let Some(seed) = config.seed {
            tracing::warn!("Prediction noise seeded with {}; results are repeatable", seed);
        }

        Self {
            geocoder,
            weather,
            seed: config.seed,
        }
    }

    /// Fresh noise for one request
    pub fn noise(&self) -> RandomNoise<ChaCha8Rng> {
        match self.seed {
            Some(seed) => RandomNoise::seeded(seed),
            None => RandomNoise::new(ChaCha8Rng::from_entropy()),
        }
    }

    /// Predict one disaster type for a location
    pub async fn predict(&self, request: &PredictionRequest) -> AppResult<PredictionResponse> {
        request.validate()?;

        let site = self.locate(&request.location).await?;
        let mut noise = self.noise();

        Ok(build_response(
            request.location.trim(),
            &site,
            request.model,
            request.disaster_type,
            Utc::now(),
            &mut noise,
        ))
    }

    /// Predict every disaster type for a location from a single weather reading
    pub async fn predict_all(
        &self,
        request: &BatchPredictionRequest,
    ) -> AppResult<BTreeMap<DisasterType, PredictionResponse>> {
        request.validate()?;

        let site = self.locate(&request.location).await?;
        let mut noise = self.noise();
        let now = Utc::now();

        Ok(DisasterType::ALL
            .into_iter()
            .map(|disaster| {
                let response = build_response(
                    request.location.trim(),
                    &site,
                    request.model,
                    disaster,
                    now,
                    &mut noise,
                );
                (disaster, response)
            })
            .collect())
    }

    async fn locate(&self, location: &str) -> AppResult<Site> {
        let location = location.trim();
        let coordinates = self
            .geocoder
            .get_coordinates(location)
            .await
            .ok_or_else(|| AppError::LocationNotFound(location.to_string()))?;

        let reading = self.weather.get_weather(coordinates).await;
        Ok(Site {
            coordinates,
            reading,
        })
    }
}

/// Headline probability for the chosen model
pub fn model_probability<N: NoiseSource + ?Sized>(
    model: PredictionModel,
    disaster: DisasterType,
    reading: &WeatherReading,
    noise: &mut N,
) -> f64 {
    if model.uses_engine() {
        scoring::probability(disaster, reading, noise)
    } else {
        let (low, high) = BASELINE_RANGE;
        noise.uniform(low, high)
    }
}

fn build_response<N: NoiseSource + ?Sized>(
    location: &str,
    site: &Site,
    model: PredictionModel,
    disaster: DisasterType,
    now: DateTime<Utc>,
    noise: &mut N,
) -> PredictionResponse {
    let reading = site.reading.clone().with_coordinates(site.coordinates);

    let probability = model_probability(model, disaster, &reading, noise);
    let forecast = scoring::forecast(disaster, &reading, now.date_naive(), noise);

    tracing::info!(
        "Prediction for {} ({}, {} model): {:.3}",
        location,
        disaster,
        model,
        probability
    );

    PredictionResponse {
        probability,
        forecast,
        factors: scoring::factor_impacts(disaster, &reading),
        key_factors: scoring::key_factors(disaster, &reading.sanitized()),
        metadata: PredictionMetadata {
            request_id: Uuid::new_v4().to_string(),
            location: location.to_string(),
            coordinates: site.coordinates,
            model,
            disaster_type: disaster,
            timestamp: now,
            weather_data: reading,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GeocodingConfig, WeatherConfig};
    use shared::scoring::{Midpoint, FORECAST_DAYS};

    fn offline_service(seed: Option<u64>) -> PredictionService {
        let geocoding = GeocodingConfig {
            api_endpoint: "http://127.0.0.1:9/search".to_string(),
            timeout_secs: 1,
            max_retries: 0,
            retry_delay_ms: 0,
            ..GeocodingConfig::default()
        };
        PredictionService::new(
            GeocodingService::new(&geocoding).unwrap(),
            WeatherService::new(&WeatherConfig::default()).unwrap(),
            &PredictionConfig { seed },
        )
    }

    #[test]
    fn test_baseline_models_stay_in_range() {
        let reading = WeatherReading::mock(None);
        let mut noise = RandomNoise::seeded(5);
        for _ in 0..200 {
            let p = model_probability(PredictionModel::Lstm, DisasterType::Flood, &reading, &mut noise);
            assert!((0.2..0.8).contains(&p));
        }
        assert_eq!(
            model_probability(PredictionModel::Svm, DisasterType::Flood, &reading, &mut Midpoint),
            0.5
        );
    }

    #[test]
    fn test_quantum_model_uses_engine() {
        let reading = WeatherReading::mock(None);
        let p = model_probability(PredictionModel::Quantum, DisasterType::Wildfire, &reading, &mut Midpoint);
        assert!((p - 0.248).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_predict_offline() {
        let service = offline_service(None);
        let request = PredictionRequest {
            location: "Oklahoma City, OK".to_string(),
            model: PredictionModel::Quantum,
            disaster_type: DisasterType::Tornado,
        };

        let response = service.predict(&request).await.unwrap();

        assert!((0.0..=1.0).contains(&response.probability));
        assert_eq!(response.forecast.len(), FORECAST_DAYS);
        assert!(response.metadata.weather_data.is_mock);
        assert_eq!(response.metadata.coordinates, Coordinates::new(35.4676, -97.5164));
        assert_eq!(response.factors.total(), rust_decimal::Decimal::ONE_HUNDRED);
        assert_eq!(response.key_factors, vec!["Normal Conditions"]);
    }

    #[tokio::test]
    async fn test_seeded_service_repeats() {
        let service = offline_service(Some(42));
        let request = PredictionRequest {
            location: "Tulsa, OK".to_string(),
            model: PredictionModel::Quantum,
            disaster_type: DisasterType::Flood,
        };

        let first = service.predict(&request).await.unwrap();
        let second = service.predict(&request).await.unwrap();
        assert_eq!(first.probability, second.probability);
        assert_eq!(first.forecast, second.forecast);
    }

    #[tokio::test]
    async fn test_predict_all_covers_every_type() {
        let service = offline_service(Some(1));
        let request = BatchPredictionRequest {
            location: "Miami, FL".to_string(),
            model: PredictionModel::Quantum,
        };

        let all = service.predict_all(&request).await.unwrap();
        assert_eq!(all.len(), DisasterType::ALL.len());
        assert!(all.contains_key(&DisasterType::Wildfire));
    }

    #[tokio::test]
    async fn test_unknown_location_is_not_found() {
        let service = offline_service(None);
        let request = PredictionRequest {
            location: "Atlantis".to_string(),
            model: PredictionModel::Quantum,
            disaster_type: DisasterType::Tornado,
        };

        let err = service.predict(&request).await.unwrap_err();
        assert!(matches!(err, AppError::LocationNotFound(_)));
    }

    #[tokio::test]
    async fn test_invalid_location_is_rejected_before_lookup() {
        let service = offline_service(None);
        let request = PredictionRequest {
            location: "42".to_string(),
            model: PredictionModel::Quantum,
            disaster_type: DisasterType::Tornado,
        };

        let err = service.predict(&request).await.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }
}

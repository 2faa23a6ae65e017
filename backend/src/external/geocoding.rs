//! Nominatim (OpenStreetMap) search client

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::error::{AppError, AppResult};
use crate::models::GeocodingResult;

/// Failure modes the geocoding service treats differently
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// Only timeouts are retried
    #[error("geocoding request timed out")]
    TimedOut,

    #[error("geocoding service unavailable: {0}")]
    Unavailable(String),

    #[error("geocoding failed: {0}")]
    Other(String),
}

/// Nominatim search client
#[derive(Clone)]
pub struct NominatimClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    display_name: String,
}

impl NominatimClient {
    pub fn new(base_url: String, user_agent: &str, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("Geocoding HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    /// Best match for `query`, or `None` when Nominatim knows no such place
    pub async fn search(&self, query: &str) -> Result<Option<GeocodingResult>, GeocodeError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodeError::TimedOut
                } else if e.is_connect() {
                    GeocodeError::Unavailable(e.to_string())
                } else {
                    GeocodeError::Other(e.to_string())
                }
            })?;

        let status = response.status();
        if status.is_server_error() || status.as_u16() == 429 {
            return Err(GeocodeError::Unavailable(format!("HTTP {}", status)));
        }
        if !status.is_success() {
            return Err(GeocodeError::Other(format!("HTTP {}", status)));
        }

        let places: Vec<NominatimPlace> = response
            .json()
            .await
            .map_err(|e| GeocodeError::Other(format!("Failed to parse geocoding response: {}", e)))?;

        places.into_iter().next().map(parse_place).transpose()
    }
}

fn parse_place(place: NominatimPlace) -> Result<GeocodingResult, GeocodeError> {
    let lat = place
        .lat
        .parse::<f64>()
        .map_err(|e| GeocodeError::Other(format!("Invalid latitude '{}': {}", place.lat, e)))?;
    let lon = place
        .lon
        .parse::<f64>()
        .map_err(|e| GeocodeError::Other(format!("Invalid longitude '{}': {}", place.lon, e)))?;

    Ok(GeocodingResult {
        lat,
        lon,
        display_name: place.display_name,
    })
}

//! Location lookup
//!
//! A static table of major US cities is consulted first so common queries
//! never leave the process; everything else goes to Nominatim.

use std::io::Read;
use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;

use crate::config::GeocodingConfig;
use crate::error::{AppError, AppResult};
use crate::external::{GeocodeError, NominatimClient};
use crate::models::GeocodingResult;
use shared::types::Coordinates;

/// Built-in city table
const EMBEDDED_CITIES: &str = include_str!("../../data/cities.csv");

/// Shortest query worth geocoding
pub const MIN_QUERY_LEN: usize = 2;

/// Location used by the health probe
const PROBE_LOCATION: &str = "New York, NY";

#[derive(Debug, Deserialize)]
struct CityRecord {
    name: String,
    latitude: f64,
    longitude: f64,
}

/// Lower-cased city names with their coordinates, in file order
#[derive(Debug, Clone, Default)]
pub struct CityTable {
    entries: Vec<(String, Coordinates)>,
}

impl CityTable {
    /// Parse a `name,latitude,longitude` CSV with a header row
    pub fn from_reader<R: Read>(reader: R) -> AppResult<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut entries = Vec::new();

        for record in csv_reader.deserialize::<CityRecord>() {
            let record = record
                .map_err(|e| AppError::Configuration(format!("Invalid city table row: {}", e)))?;
            entries.push((
                record.name.trim().to_lowercase(),
                Coordinates::new(record.latitude, record.longitude),
            ));
        }

        Ok(Self { entries })
    }

    pub fn embedded() -> AppResult<Self> {
        Self::from_reader(EMBEDDED_CITIES.as_bytes())
    }

    /// Load from `path` when given, otherwise use the built-in table
    pub fn load(path: Option<&str>) -> AppResult<Self> {
        match path {
            Some(path) => {
                let file = std::fs::File::open(path).map_err(|e| {
                    AppError::Configuration(format!("Cannot open city table {}: {}", path, e))
                })?;
                Self::from_reader(file)
            }
            None => Self::embedded(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact match first, then the first entry where either name contains
    /// the other
    pub fn lookup(&self, location: &str) -> Option<(&str, Coordinates)> {
        let query = location.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }

        self.entries
            .iter()
            .find(|(name, _)| *name == query)
            .or_else(|| {
                self.entries
                    .iter()
                    .find(|(name, _)| name.contains(&query) || query.contains(name.as_str()))
            })
            .map(|(name, coordinates)| (name.as_str(), *coordinates))
    }
}

/// Geocoding service backed by the city table and Nominatim
#[derive(Clone)]
pub struct GeocodingService {
    cities: Arc<CityTable>,
    client: NominatimClient,
    max_retries: u32,
    retry_delay: Duration,
}

impl GeocodingService {
    pub fn new(config: &GeocodingConfig) -> AppResult<Self> {
        let cities = CityTable::load(config.fallback_table_path.as_deref())?;
        if cities.is_empty() {
            tracing::warn!("Fallback city table is empty; every lookup goes to Nominatim");
        } else {
            tracing::info!("Loaded {} fallback city coordinates", cities.len());
        }

        let client = NominatimClient::new(
            config.api_endpoint.clone(),
            &config.user_agent,
            Duration::from_secs(config.timeout_secs),
        )?;

        Ok(Self {
            cities: Arc::new(cities),
            client,
            max_retries: config.max_retries,
            retry_delay: Duration::from_millis(config.retry_delay_ms),
        })
    }

    /// Coordinates for a free-text location
    pub async fn get_coordinates(&self, location: &str) -> Option<Coordinates> {
        self.get_location_info(location)
            .await
            .map(|info| Coordinates::new(info.lat, info.lon))
    }

    /// Coordinates and display name for a free-text location
    pub async fn get_location_info(&self, location: &str) -> Option<GeocodingResult> {
        if location.trim().chars().count() < MIN_QUERY_LEN {
            tracing::warn!("Invalid location provided: {:?}", location);
            return None;
        }

        if let Some((matched, coordinates)) = self.cities.lookup(location) {
            tracing::info!(
                "Using fallback coordinates for {} (matched '{}'): {:?}",
                location,
                matched,
                coordinates
            );
            return Some(GeocodingResult {
                lat: coordinates.latitude,
                lon: coordinates.longitude,
                display_name: format!("{} (fallback coordinates)", location),
            });
        }

        self.search_with_retry(location).await
    }

    async fn search_with_retry(&self, location: &str) -> Option<GeocodingResult> {
        let query = search_query(location);
        let attempts = self.max_retries + 1;

        for attempt in 1..=attempts {
            tracing::info!("Geocoding location: {} (attempt {}/{})", location, attempt, attempts);

            match self.client.search(&query).await {
                Ok(Some(result)) => {
                    tracing::info!("Found location info: {}", result.display_name);
                    return Some(result);
                }
                Ok(None) => {
                    tracing::warn!("No coordinates found for location: {}", location);
                    return None;
                }
                Err(GeocodeError::TimedOut) if attempt < attempts => {
                    tracing::warn!("Geocoding timed out for location: {} (attempt {})", location, attempt);
                    tokio::time::sleep(self.retry_delay).await;
                }
                Err(GeocodeError::TimedOut) => {
                    tracing::error!(
                        "Geocoding failed after {} attempts for location: {}",
                        attempts,
                        location
                    );
                    return None;
                }
                Err(e) => {
                    tracing::error!("Error geocoding location {}: {}", location, e);
                    return None;
                }
            }
        }

        None
    }

    /// Resolve a known location as a health probe
    pub async fn test_service(&self) -> bool {
        let ok = self.get_coordinates(PROBE_LOCATION).await.is_some();
        if ok {
            tracing::info!("Geocoding service test successful");
        } else {
            tracing::error!("Geocoding service test failed");
        }
        ok
    }
}

/// Bias free-text searches toward the United States
pub fn search_query(location: &str) -> String {
    let trimmed = location.trim();
    let lower = trimmed.to_lowercase();
    if ["usa", "united states", "us"].iter().any(|suffix| lower.ends_with(suffix)) {
        trimmed.to_string()
    } else {
        format!("{}, USA", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_config() -> GeocodingConfig {
        GeocodingConfig {
            api_endpoint: "http://127.0.0.1:9/search".to_string(),
            timeout_secs: 1,
            max_retries: 0,
            retry_delay_ms: 0,
            ..GeocodingConfig::default()
        }
    }

    #[test]
    fn test_embedded_table_loads() {
        let table = CityTable::embedded().unwrap();
        assert!(table.len() > 100);
    }

    #[test]
    fn test_lookup_exact_then_partial() {
        let table = CityTable::embedded().unwrap();

        let (name, coords) = table.lookup("  Oklahoma City, OK ").unwrap();
        assert_eq!(name, "oklahoma city, ok");
        assert_eq!(coords, Coordinates::new(35.4676, -97.5164));

        // Query contains a table key
        let (name, _) = table.lookup("Downtown Tulsa area").unwrap();
        assert_eq!(name, "tulsa");

        assert!(table.lookup("Atlantis").is_none());
    }

    #[test]
    fn test_custom_table() {
        let csv = "name,latitude,longitude\nGotham,40.0,-75.0\n\"Metropolis, NY\",41.0,-74.0\n";
        let table = CityTable::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("metropolis, ny").map(|(_, c)| c.latitude), Some(41.0));
    }

    #[test]
    fn test_malformed_table_is_a_configuration_error() {
        let csv = "name,latitude,longitude\nGotham,north,-75.0\n";
        assert!(matches!(
            CityTable::from_reader(csv.as_bytes()),
            Err(AppError::Configuration(_))
        ));
    }

    #[test]
    fn test_search_query_suffix() {
        assert_eq!(search_query("Boise, ID"), "Boise, ID, USA");
        assert_eq!(search_query("Boise, ID, USA"), "Boise, ID, USA");
        assert_eq!(search_query("Boise, United States"), "Boise, United States");
    }

    #[tokio::test]
    async fn test_fallback_table_answers_without_network() {
        let service = GeocodingService::new(&offline_config()).unwrap();

        let info = service.get_location_info("Wichita, KS").await.unwrap();
        assert_eq!(info.display_name, "Wichita, KS (fallback coordinates)");
        assert!(service.test_service().await);
    }

    #[tokio::test]
    async fn test_unknown_location_with_unreachable_provider() {
        let service = GeocodingService::new(&offline_config()).unwrap();

        assert!(service.get_coordinates("Atlantis").await.is_none());
        assert!(service.get_coordinates("x").await.is_none());
        assert!(service.get_location_info("  ").await.is_none());
    }
}

//! Configuration management for the Disaster Prediction API
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with DP_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Placeholder shipped in example `.env` files; treated as "no key"
pub const PLACEHOLDER_WEATHER_API_KEY: &str = "your_openweathermap_api_key_here";

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Weather API configuration
    pub weather: WeatherConfig,

    /// Geocoding configuration
    pub geocoding: GeocodingConfig,

    /// Prediction engine configuration
    #[serde(default)]
    pub prediction: PredictionConfig,

    /// Allowed CORS origins
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// OpenWeatherMap base URL
    pub api_endpoint: String,

    /// OpenWeatherMap API key; mock weather is served without one
    #[serde(default)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeocodingConfig {
    /// Nominatim search URL
    pub api_endpoint: String,

    /// User-Agent sent to Nominatim (required by its usage policy)
    pub user_agent: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Extra attempts after a timed-out request
    pub max_retries: u32,

    /// Pause between attempts in milliseconds
    pub retry_delay_ms: u64,

    /// CSV file replacing the built-in city table
    #[serde(default)]
    pub fallback_table_path: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct PredictionConfig {
    /// Fixed noise seed; every request replays the same sequence when set
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    /// `*` allows any origin
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("DP_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 8000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("weather.api_endpoint", WeatherConfig::default().api_endpoint)?
            .set_default("weather.timeout_secs", 10)?
            .set_default("geocoding.api_endpoint", GeocodingConfig::default().api_endpoint)?
            .set_default("geocoding.user_agent", "natural_disaster_predictor")?
            .set_default("geocoding.timeout_secs", 10)?
            .set_default("geocoding.max_retries", 2)?
            .set_default("geocoding.retry_delay_ms", 1000)?
            .set_default("cors.allowed_origins", vec!["*"])?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (DP_ prefix)
            .add_source(
                Environment::with_prefix("DP")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Socket address string the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl WeatherConfig {
    /// The configured API key, unless missing, blank or the placeholder
    pub fn usable_api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && *key != PLACEHOLDER_WEATHER_API_KEY)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            weather: WeatherConfig::default(),
            geocoding: GeocodingConfig::default(),
            prediction: PredictionConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_endpoint: "https://api.openweathermap.org/data/2.5".to_string(),
            api_key: None,
            timeout_secs: 10,
        }
    }
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            api_endpoint: "https://nominatim.openstreetmap.org/search".to_string(),
            user_agent: "natural_disaster_predictor".to_string(),
            timeout_secs: 10,
            max_retries: 2,
            retry_delay_ms: 1000,
            fallback_table_path: None,
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
        }
    }
}

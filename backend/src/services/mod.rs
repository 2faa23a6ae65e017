//! Business logic services for the Disaster Prediction API

pub mod geocoding;
pub mod prediction;
pub mod weather;

pub use geocoding::GeocodingService;
pub use prediction::PredictionService;
pub use weather::WeatherService;

//! External API integrations

pub mod geocoding;
pub mod weather;

pub use geocoding::{GeocodeError, NominatimClient};
pub use weather::WeatherClient;

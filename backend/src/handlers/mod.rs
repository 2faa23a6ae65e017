//! HTTP handlers for the Disaster Prediction API

pub mod catalog;
pub mod geocoding;
pub mod health;
pub mod prediction;
pub mod weather;

pub use catalog::*;
pub use geocoding::*;
pub use health::*;
pub use prediction::*;
pub use weather::*;

//! Domain models for the Natural Disaster Prediction Platform

mod prediction;
mod score;
mod stats;
mod weather;

pub use prediction::*;
pub use score::*;
pub use stats::*;
pub use weather::*;

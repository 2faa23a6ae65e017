//! Shared types, models and the disaster scoring engine
//!
//! This crate contains everything that must behave identically on the
//! backend and in the browser (via WASM): domain models, input validation
//! and the pure scoring functions.

pub mod models;
pub mod scoring;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;

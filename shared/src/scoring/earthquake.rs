//! Earthquake scoring
//!
//! Weather is a weak proxy here, so the weighted total is scaled down to a
//! ceiling of 0.6.

use super::noise::NoiseSource;
use super::{clamp01, weighted_sum, REFERENCE_PRESSURE_HPA};
use crate::models::{Factor, WeatherReading};

pub const CEILING: f64 = 0.6;

pub const WEIGHTS: [(Factor, f64); 2] = [(Factor::Pressure, 0.7), (Factor::Humidity, 0.3)];

pub fn sub_scores(reading: &WeatherReading) -> [(Factor, f64); 2] {
    [
        (
            Factor::Pressure,
            clamp01((REFERENCE_PRESSURE_HPA - reading.pressure_hpa) / 50.0),
        ),
        (Factor::Humidity, clamp01(reading.humidity_percent / 100.0)),
    ]
}

pub fn probability<N: NoiseSource + ?Sized>(reading: &WeatherReading, noise: &mut N) -> f64 {
    let total = weighted_sum(&sub_scores(reading), &WEIGHTS);
    clamp01(total * CEILING + noise.uniform(-0.1, 0.1))
}

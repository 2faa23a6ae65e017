//! Wildfire scoring: hot, dry and windy conditions drive the score.

use super::noise::NoiseSource;
use super::{clamp01, weighted_sum};
use crate::models::{Factor, WeatherReading};

pub const CEILING: f64 = 0.8;

pub const WEIGHTS: [(Factor, f64); 3] = [
    (Factor::Temperature, 0.4),
    (Factor::Humidity, 0.4),
    (Factor::WindSpeed, 0.2),
];

pub fn sub_scores(reading: &WeatherReading) -> [(Factor, f64); 3] {
    [
        (
            Factor::Temperature,
            clamp01((reading.temperature_celsius() - 20.0) / 20.0),
        ),
        (
            Factor::Humidity,
            clamp01((100.0 - reading.humidity_percent) / 70.0),
        ),
        (Factor::WindSpeed, clamp01(reading.wind_speed_mps / 10.0)),
    ]
}

pub fn probability<N: NoiseSource + ?Sized>(reading: &WeatherReading, noise: &mut N) -> f64 {
    let total = weighted_sum(&sub_scores(reading), &WEIGHTS);
    clamp01(total * CEILING + noise.uniform(-0.1, 0.1))
}

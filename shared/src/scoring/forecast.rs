//! 30-day forecast simulation
//!
//! The reading drifts by a small random step each day and every simulated
//! day is scored independently. Variables are clamped to plausible ranges so
//! the walk never leaves physical territory however long it runs.

use chrono::NaiveDate;

use super::noise::NoiseSource;
use super::score_disaster;
use crate::models::{ForecastDay, WeatherReading};
use crate::types::DisasterType;

pub const FORECAST_DAYS: usize = 30;

pub const TEMPERATURE_RANGE_KELVIN: (f64, f64) = (223.15, 323.15);
pub const PRESSURE_RANGE_HPA: (f64, f64) = (900.0, 1100.0);

/// Advance a reading by one day of random drift
pub fn perturb<N: NoiseSource + ?Sized>(reading: &WeatherReading, noise: &mut N) -> WeatherReading {
    let (t_min, t_max) = TEMPERATURE_RANGE_KELVIN;
    let (p_min, p_max) = PRESSURE_RANGE_HPA;

    let mut next = reading.clone();
    next.temperature_kelvin = (reading.temperature_kelvin + noise.uniform(-2.0, 2.0)).clamp(t_min, t_max);
    next.humidity_percent = (reading.humidity_percent + noise.uniform(-5.0, 5.0)).clamp(0.0, 100.0);
    next.pressure_hpa = (reading.pressure_hpa + noise.uniform(-5.0, 5.0)).clamp(p_min, p_max);
    next.wind_speed_mps = (reading.wind_speed_mps + noise.uniform(-1.0, 1.0)).max(0.0);
    next
}

/// Score [`FORECAST_DAYS`] consecutive days starting at `start`.
///
/// Day `i` holds the state after `i + 1` steps of drift from `reading`.
pub fn forecast<N: NoiseSource + ?Sized>(
    disaster: DisasterType,
    reading: &WeatherReading,
    start: NaiveDate,
    noise: &mut N,
) -> Vec<ForecastDay> {
    let mut state = reading.sanitized();
    let mut days = Vec::with_capacity(FORECAST_DAYS);

    for date in start.iter_days().take(FORECAST_DAYS) {
        state = perturb(&state, noise);
        let score = score_disaster(disaster, &state, noise);
        days.push(ForecastDay {
            date,
            reading: state.clone(),
            score,
        });
    }

    days
}

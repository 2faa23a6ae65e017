//! Tornado scoring
//!
//! Each variable is scored with a banded step function: full marks inside the
//! optimal band, then 0.7 and 0.4 for progressively wider bands around it and
//! 0.1 anywhere else. The weighted total is scaled by a noise multiplier and
//! dampened in regions where tornadoes are rare.

use super::noise::NoiseSource;
use super::regions::{is_low_tornado_region, REGIONAL_DAMPENING};
use super::{clamp01, weighted_sum};
use crate::models::{Factor, WeatherReading};

/// Nested ranges scoring 1.0, 0.7 and 0.4; inclusive on both ends
pub type Bands = [(f64, f64); 3];

const BAND_SCORES: [f64; 3] = [1.0, 0.7, 0.4];
const OUTSIDE_BANDS: f64 = 0.1;

pub const TEMPERATURE_BANDS_CELSIUS: Bands = [(20.0, 30.0), (15.0, 35.0), (10.0, 40.0)];
pub const HUMIDITY_BANDS_PERCENT: Bands = [(60.0, 80.0), (50.0, 90.0), (40.0, 95.0)];
pub const PRESSURE_BANDS_HPA: Bands = [(980.0, 1000.0), (970.0, 1010.0), (960.0, 1020.0)];
pub const WIND_BANDS_MPS: Bands = [(10.0, 20.0), (7.0, 25.0), (5.0, 30.0)];

pub const WEIGHTS: [(Factor, f64); 4] = [
    (Factor::Temperature, 0.3),
    (Factor::Humidity, 0.3),
    (Factor::Pressure, 0.2),
    (Factor::WindSpeed, 0.2),
];

/// Score `value` against a set of nested bands
pub fn band_score(value: f64, bands: &Bands) -> f64 {
    bands
        .iter()
        .zip(BAND_SCORES)
        .find(|((low, high), _)| (*low..=*high).contains(&value))
        .map(|(_, score)| score)
        .unwrap_or(OUTSIDE_BANDS)
}

pub fn sub_scores(reading: &WeatherReading) -> [(Factor, f64); 4] {
    [
        (
            Factor::Temperature,
            band_score(reading.temperature_celsius(), &TEMPERATURE_BANDS_CELSIUS),
        ),
        (
            Factor::Humidity,
            band_score(reading.humidity_percent, &HUMIDITY_BANDS_PERCENT),
        ),
        (
            Factor::Pressure,
            band_score(reading.pressure_hpa, &PRESSURE_BANDS_HPA),
        ),
        (
            Factor::WindSpeed,
            band_score(reading.wind_speed_mps, &WIND_BANDS_MPS),
        ),
    ]
}

pub fn probability<N: NoiseSource + ?Sized>(reading: &WeatherReading, noise: &mut N) -> f64 {
    let total = weighted_sum(&sub_scores(reading), &WEIGHTS);
    let mut probability = (total * noise.uniform(0.9, 1.1)).min(1.0);

    if reading.coordinates.is_some_and(is_low_tornado_region) {
        probability *= REGIONAL_DAMPENING;
    }

    clamp01(probability)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::Midpoint;
    use crate::types::Coordinates;

    #[test]
    fn test_band_edges() {
        assert_eq!(band_score(20.0, &TEMPERATURE_BANDS_CELSIUS), 1.0);
        assert_eq!(band_score(30.0, &TEMPERATURE_BANDS_CELSIUS), 1.0);
        assert_eq!(band_score(19.9, &TEMPERATURE_BANDS_CELSIUS), 0.7);
        assert_eq!(band_score(35.0, &TEMPERATURE_BANDS_CELSIUS), 0.7);
        assert_eq!(band_score(35.1, &TEMPERATURE_BANDS_CELSIUS), 0.4);
        assert_eq!(band_score(9.9, &TEMPERATURE_BANDS_CELSIUS), 0.1);
        assert_eq!(band_score(1013.0, &PRESSURE_BANDS_HPA), 0.4);
        assert_eq!(band_score(1021.0, &PRESSURE_BANDS_HPA), 0.1);
        assert_eq!(band_score(5.5, &WIND_BANDS_MPS), 0.4);
        assert_eq!(band_score(96.0, &HUMIDITY_BANDS_PERCENT), 0.1);
    }

    #[test]
    fn test_mock_reading_probability() {
        let reading = WeatherReading::mock(None);
        let p = probability(&reading, &mut Midpoint);
        assert!((p - 0.76).abs() < 1e-9, "got {}", p);
    }

    #[test]
    fn test_dampened_in_new_york_but_not_oklahoma() {
        let new_york = WeatherReading::mock(Some(Coordinates::new(40.7128, -74.0060)));
        let oklahoma = WeatherReading::mock(Some(Coordinates::new(35.4676, -97.5164)));

        let p_ny = probability(&new_york, &mut Midpoint);
        let p_ok = probability(&oklahoma, &mut Midpoint);

        assert!((p_ny - 0.228).abs() < 1e-9, "got {}", p_ny);
        assert!((p_ok - 0.76).abs() < 1e-9, "got {}", p_ok);
    }

    #[test]
    fn test_ideal_conditions_cap_at_one() {
        let reading = WeatherReading::new(298.15, 70.0, 990.0, 15.0);
        let p = probability(&reading, &mut Midpoint);
        assert!((p - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_hostile_conditions_score_floor() {
        let reading = WeatherReading::new(253.15, 10.0, 1040.0, 0.0);
        let p = probability(&reading, &mut Midpoint);
        assert!((p - 0.1).abs() < 1e-9);
    }
}

//! Flood scoring
//!
//! Saturated air and falling pressure dominate; temperature peaks at 15 °C,
//! where rain rather than snow or evaporation is most likely.

use super::noise::NoiseSource;
use super::{clamp01, weighted_sum, REFERENCE_PRESSURE_HPA};
use crate::models::{Factor, WeatherReading};

pub const CEILING: f64 = 0.7;

pub const WEIGHTS: [(Factor, f64); 3] = [
    (Factor::Humidity, 0.4),
    (Factor::Pressure, 0.4),
    (Factor::Temperature, 0.2),
];

pub fn sub_scores(reading: &WeatherReading) -> [(Factor, f64); 3] {
    [
        (
            Factor::Humidity,
            clamp01((reading.humidity_percent - 60.0) / 40.0),
        ),
        (
            Factor::Pressure,
            clamp01((REFERENCE_PRESSURE_HPA - reading.pressure_hpa) / 30.0),
        ),
        (
            Factor::Temperature,
            clamp01(1.0 - (reading.temperature_celsius() - 15.0).abs() / 20.0),
        ),
    ]
}

pub fn probability<N: NoiseSource + ?Sized>(reading: &WeatherReading, noise: &mut N) -> f64 {
    let total = weighted_sum(&sub_scores(reading), &WEIGHTS);
    clamp01(total * CEILING + noise.uniform(-0.1, 0.1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::Midpoint;

    #[test]
    fn test_mock_reading_probability() {
        let p = probability(&WeatherReading::mock(None), &mut Midpoint);
        assert!((p - 0.14).abs() < 1e-9, "got {}", p);
    }

    #[test]
    fn test_storm_conditions_reach_ceiling() {
        let reading = WeatherReading::new(288.15, 100.0, 980.0, 12.0);
        let p = probability(&reading, &mut Midpoint);
        assert!((p - CEILING).abs() < 1e-9);
    }

    #[test]
    fn test_pressure_factor_measured_from_reference() {
        let at_reference = WeatherReading::new(288.15, 60.0, REFERENCE_PRESSURE_HPA, 0.0);
        let below = WeatherReading::new(288.15, 60.0, REFERENCE_PRESSURE_HPA - 15.0, 0.0);
        assert_eq!(sub_scores(&at_reference)[1], (Factor::Pressure, 0.0));
        assert_eq!(sub_scores(&below)[1], (Factor::Pressure, 0.5));
    }
}

//! Disaster probability scoring engine
//!
//! Pure functions over a [`WeatherReading`]. All randomness is drawn from the
//! [`NoiseSource`] passed in by the caller.

pub mod earthquake;
pub mod flood;
pub mod forecast;
pub mod impacts;
pub mod key_factors;
pub mod noise;
pub mod regions;
pub mod tornado;
pub mod wildfire;

pub use forecast::{forecast, perturb, FORECAST_DAYS};
pub use impacts::{normalize, visual_impacts};
pub use key_factors::{key_factors, NORMAL_CONDITIONS};
pub use noise::{Midpoint, NoiseSource, RandomNoise};

use crate::models::{Factor, FactorImpacts, ScoreResult, WeatherReading};
use crate::types::DisasterType;

/// Baseline sea-level pressure that pressure-drop factors are measured against
pub const REFERENCE_PRESSURE_HPA: f64 = 1013.0;

pub fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

pub(crate) fn weighted_sum(scores: &[(Factor, f64)], weights: &[(Factor, f64)]) -> f64 {
    scores
        .iter()
        .zip(weights)
        .map(|((_, score), (_, weight))| score * weight)
        .sum()
}

/// Unweighted sub-scores for the variables a disaster type depends on
pub fn sub_scores(disaster: DisasterType, reading: &WeatherReading) -> Vec<(Factor, f64)> {
    match disaster {
        DisasterType::Tornado => tornado::sub_scores(reading).to_vec(),
        DisasterType::Earthquake => earthquake::sub_scores(reading).to_vec(),
        DisasterType::Wildfire => wildfire::sub_scores(reading).to_vec(),
        DisasterType::Flood => flood::sub_scores(reading).to_vec(),
    }
}

/// Headline probability in [0, 1]
pub fn probability<N: NoiseSource + ?Sized>(
    disaster: DisasterType,
    reading: &WeatherReading,
    noise: &mut N,
) -> f64 {
    let reading = reading.sanitized();
    match disaster {
        DisasterType::Tornado => tornado::probability(&reading, noise),
        DisasterType::Earthquake => earthquake::probability(&reading, noise),
        DisasterType::Wildfire => wildfire::probability(&reading, noise),
        DisasterType::Flood => flood::probability(&reading, noise),
    }
}

/// Percentage contribution of each variable, summing to exactly 100
pub fn factor_impacts(disaster: DisasterType, reading: &WeatherReading) -> FactorImpacts {
    visual_impacts(&sub_scores(disaster, &reading.sanitized()))
}

/// Probability, factor impacts and key factors for one reading
pub fn score_disaster<N: NoiseSource + ?Sized>(
    disaster: DisasterType,
    reading: &WeatherReading,
    noise: &mut N,
) -> ScoreResult {
    let reading = reading.sanitized();
    ScoreResult {
        probability: probability(disaster, &reading, noise),
        factor_impacts: factor_impacts(disaster, &reading),
        key_factors: key_factors(disaster, &reading),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_scores_for_mock_reading() {
        let mock = WeatherReading::mock(None);
        let expected = [
            (DisasterType::Tornado, 0.76),
            (DisasterType::Earthquake, 0.117),
            (DisasterType::Wildfire, 0.248),
            (DisasterType::Flood, 0.14),
        ];

        for (disaster, p) in expected {
            let result = score_disaster(disaster, &mock, &mut Midpoint);
            assert!((result.probability - p).abs() < 1e-9, "{}: {}", disaster, result.probability);
            assert_eq!(result.factor_impacts.total(), Decimal::ONE_HUNDRED);
            assert!(!result.key_factors.is_empty());
        }
    }

    #[test]
    fn test_impacts_only_cover_relevant_factors() {
        let impacts = factor_impacts(DisasterType::Earthquake, &WeatherReading::mock(None));
        assert!(impacts.temperature.is_none());
        assert!(impacts.wind_speed.is_none());
        // Pressure sub-score is 0 and gets floored: 0.1 / 0.75
        assert_eq!(impacts.pressure, Some(Decimal::new(133, 1)));
        assert_eq!(impacts.humidity, Some(Decimal::new(867, 1)));
    }

    #[test]
    fn test_non_finite_reading_still_scores() {
        let broken = WeatherReading::new(f64::NAN, f64::INFINITY, f64::NEG_INFINITY, f64::NAN);
        let mut noise = RandomNoise::seeded(11);
        for disaster in DisasterType::ALL {
            let result = score_disaster(disaster, &broken, &mut noise);
            assert!((0.0..=1.0).contains(&result.probability));
            assert_eq!(result.factor_impacts.total(), Decimal::ONE_HUNDRED);
        }
    }

    #[test]
    fn test_weights_sum_to_one() {
        let totals = [
            tornado::WEIGHTS.iter().map(|(_, w)| w).sum::<f64>(),
            earthquake::WEIGHTS.iter().map(|(_, w)| w).sum::<f64>(),
            wildfire::WEIGHTS.iter().map(|(_, w)| w).sum::<f64>(),
            flood::WEIGHTS.iter().map(|(_, w)| w).sum::<f64>(),
        ];
        for total in totals {
            assert!((total - 1.0).abs() < 1e-9);
        }
    }
}

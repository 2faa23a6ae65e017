//! Scoring output models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::WeatherReading;

/// Weather variable contributing to a disaster score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    Temperature,
    Humidity,
    Pressure,
    WindSpeed,
}

impl Factor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Factor::Temperature => "temperature",
            Factor::Humidity => "humidity",
            Factor::Pressure => "pressure",
            Factor::WindSpeed => "wind_speed",
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Percentage share of each factor in a disaster score.
///
/// Factors that do not apply to a disaster type are `None`. Present values
/// always sum to exactly 100.0.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FactorImpacts {
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub temperature: Option<Decimal>,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub humidity: Option<Decimal>,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub pressure: Option<Decimal>,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub wind_speed: Option<Decimal>,
}

impl FactorImpacts {
    pub fn get(&self, factor: Factor) -> Option<Decimal> {
        match factor {
            Factor::Temperature => self.temperature,
            Factor::Humidity => self.humidity,
            Factor::Pressure => self.pressure,
            Factor::WindSpeed => self.wind_speed,
        }
    }

    pub fn set(&mut self, factor: Factor, value: Decimal) {
        let slot = match factor {
            Factor::Temperature => &mut self.temperature,
            Factor::Humidity => &mut self.humidity,
            Factor::Pressure => &mut self.pressure,
            Factor::WindSpeed => &mut self.wind_speed,
        };
        *slot = Some(value);
    }

    /// Present entries in canonical factor order
    pub fn entries(&self) -> Vec<(Factor, Decimal)> {
        [
            Factor::Temperature,
            Factor::Humidity,
            Factor::Pressure,
            Factor::WindSpeed,
        ]
        .into_iter()
        .filter_map(|f| self.get(f).map(|v| (f, v)))
        .collect()
    }

    pub fn total(&self) -> Decimal {
        self.entries().into_iter().map(|(_, v)| v).sum()
    }
}

impl FromIterator<(Factor, Decimal)> for FactorImpacts {
    fn from_iter<I: IntoIterator<Item = (Factor, Decimal)>>(iter: I) -> Self {
        let mut impacts = FactorImpacts::default();
        for (factor, value) in iter {
            impacts.set(factor, value);
        }
        impacts
    }
}

/// Result of scoring one reading for one disaster type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreResult {
    /// Probability in [0, 1]
    pub probability: f64,
    pub factor_impacts: FactorImpacts,
    /// Triggered threshold labels, or the single "Normal Conditions" sentinel
    pub key_factors: Vec<String>,
}

/// One simulated day of a 30-day forecast
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub reading: WeatherReading,
    pub score: ScoreResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_impacts_serialize_as_numbers() {
        let impacts: FactorImpacts = [
            (Factor::Pressure, Decimal::new(250, 1)),
            (Factor::Humidity, Decimal::new(750, 1)),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_value(&impacts).unwrap();
        assert_eq!(json["pressure"], serde_json::json!(25.0));
        assert_eq!(json["humidity"], serde_json::json!(75.0));
        assert!(json.get("temperature").is_none());
    }

    #[test]
    fn test_factor_impacts_total() {
        let impacts: FactorImpacts = [
            (Factor::Temperature, Decimal::new(333, 1)),
            (Factor::Humidity, Decimal::new(333, 1)),
            (Factor::WindSpeed, Decimal::new(334, 1)),
        ]
        .into_iter()
        .collect();

        assert_eq!(impacts.total(), Decimal::from(100));
        assert_eq!(impacts.entries().len(), 3);
    }
}

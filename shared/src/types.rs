//! Common types used across the platform

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// GPS coordinates in decimal degrees
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Disaster types the engine can score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum DisasterType {
    Tornado,
    Earthquake,
    #[serde(alias = "fire")]
    Wildfire,
    Flood,
}

impl DisasterType {
    /// Every disaster type, in dashboard order
    pub const ALL: [DisasterType; 4] = [
        DisasterType::Tornado,
        DisasterType::Earthquake,
        DisasterType::Wildfire,
        DisasterType::Flood,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DisasterType::Tornado => "tornado",
            DisasterType::Earthquake => "earthquake",
            DisasterType::Wildfire => "wildfire",
            DisasterType::Flood => "flood",
        }
    }
}

impl fmt::Display for DisasterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known variant
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind}: {value}")]
pub struct ParseVariantError {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for DisasterType {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tornado" => Ok(DisasterType::Tornado),
            "earthquake" => Ok(DisasterType::Earthquake),
            // The legacy dashboard called wildfires "fire"
            "wildfire" | "fire" => Ok(DisasterType::Wildfire),
            "flood" => Ok(DisasterType::Flood),
            _ => Err(ParseVariantError {
                kind: "disaster type",
                value: s.to_string(),
            }),
        }
    }
}

/// Prediction model selectable by the client
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PredictionModel {
    /// Threshold scoring engine
    #[default]
    Quantum,
    Lstm,
    Rf,
    Xgb,
    Svm,
    Mlp,
}

impl PredictionModel {
    pub const ALL: [PredictionModel; 6] = [
        PredictionModel::Quantum,
        PredictionModel::Lstm,
        PredictionModel::Rf,
        PredictionModel::Xgb,
        PredictionModel::Svm,
        PredictionModel::Mlp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PredictionModel::Quantum => "quantum",
            PredictionModel::Lstm => "lstm",
            PredictionModel::Rf => "rf",
            PredictionModel::Xgb => "xgb",
            PredictionModel::Svm => "svm",
            PredictionModel::Mlp => "mlp",
        }
    }

    /// Whether this model is backed by the scoring engine rather than a placeholder
    pub fn uses_engine(&self) -> bool {
        matches!(self, PredictionModel::Quantum)
    }
}

impl fmt::Display for PredictionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PredictionModel {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PredictionModel::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseVariantError {
                kind: "prediction model",
                value: s.to_string(),
            })
    }
}

/// Envelope returned by every JSON endpoint under `/api`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            message: None,
        }
    }

    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disaster_type_parsing() {
        assert_eq!("Tornado".parse::<DisasterType>(), Ok(DisasterType::Tornado));
        assert_eq!("fire".parse::<DisasterType>(), Ok(DisasterType::Wildfire));
        assert!("hurricane".parse::<DisasterType>().is_err());
    }

    #[test]
    fn test_disaster_type_wire_format() {
        let json = serde_json::to_string(&DisasterType::Wildfire).unwrap();
        assert_eq!(json, "\"wildfire\"");

        // Both parsers accept the legacy name
        let legacy: DisasterType = serde_json::from_str("\"fire\"").unwrap();
        assert_eq!(legacy, DisasterType::Wildfire);
    }

    #[test]
    fn test_prediction_model_default_is_engine_backed() {
        assert_eq!(PredictionModel::default(), PredictionModel::Quantum);
        assert!(PredictionModel::default().uses_engine());
        assert!(!PredictionModel::Lstm.uses_engine());
        assert_eq!("XGB".parse::<PredictionModel>(), Ok(PredictionModel::Xgb));
    }
}

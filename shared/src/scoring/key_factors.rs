//! Human-readable labels for the conditions driving a score

use crate::models::WeatherReading;
use crate::types::DisasterType;

/// Returned when no threshold is crossed
pub const NORMAL_CONDITIONS: &str = "Normal Conditions";

/// Labels for every threshold the reading crosses. Never empty.
pub fn key_factors(disaster: DisasterType, reading: &WeatherReading) -> Vec<String> {
    let temp_c = reading.temperature_celsius();
    let humidity = reading.humidity_percent;
    let pressure = reading.pressure_hpa;
    let wind = reading.wind_speed_mps;

    let rules: Vec<(bool, &str)> = match disaster {
        DisasterType::Tornado => vec![
            (temp_c > 25.0, "High Temperature"),
            (humidity > 70.0, "High Humidity"),
            (pressure < 1000.0, "Low Pressure"),
            (wind > 10.0, "Strong Winds"),
        ],
        DisasterType::Earthquake => vec![
            (pressure < 990.0, "Low Pressure"),
            (humidity > 80.0, "High Humidity"),
        ],
        DisasterType::Wildfire => vec![
            (temp_c > 30.0, "High Temperature"),
            (humidity < 30.0, "Low Humidity"),
            (wind > 5.0, "Strong Winds"),
        ],
        DisasterType::Flood => vec![
            (humidity > 80.0, "High Humidity"),
            (pressure < 1000.0, "Low Pressure"),
            ((10.0..=20.0).contains(&temp_c), "Moderate Temperature"),
        ],
    };

    let labels: Vec<String> = rules
        .into_iter()
        .filter(|(fired, _)| *fired)
        .map(|(_, label)| label.to_string())
        .collect();

    if labels.is_empty() {
        vec![NORMAL_CONDITIONS.to_string()]
    } else {
        labels
    }
}

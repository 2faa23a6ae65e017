//! Weather reading tests
//!
//! Tests for weather inputs including:
//! - Mock reading substituted for an unavailable provider
//! - Sanitization of malformed readings before scoring
//! - Coordinate and location validation

use proptest::prelude::*;
use shared::models::{WeatherReading, KELVIN_OFFSET, MOCK_PRESSURE_HPA};
use shared::types::Coordinates;
use shared::validation::{validate_coordinates, validate_location, validate_weather_reading};

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_mock_reading_wire_format() {
        let mock = WeatherReading::mock(Some(Coordinates::new(35.4676, -97.5164)));
        let json = serde_json::to_value(&mock).unwrap();

        assert_eq!(json["temperature_kelvin"], 293.15);
        assert_eq!(json["humidity_percent"], 65.0);
        assert_eq!(json["wind_deg"], 180.0);
        assert_eq!(json["is_mock"], true);
        assert_eq!(json["conditions"]["description"], "clear sky");
        assert_eq!(json["conditions"]["visibility_meters"], 10000);
    }

    #[test]
    fn test_mock_reading_is_valid() {
        assert!(validate_weather_reading(&WeatherReading::mock(None)).is_ok());
    }

    #[test]
    fn test_celsius_conversion() {
        let reading = WeatherReading::new(KELVIN_OFFSET + 31.5, 40.0, 1000.0, 2.0);
        assert!((reading.temperature_celsius() - 31.5).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_readings() {
        assert!(validate_weather_reading(&WeatherReading::new(300.0, 120.0, 1000.0, 1.0)).is_err());
        assert!(validate_weather_reading(&WeatherReading::new(300.0, 50.0, 1000.0, -1.0)).is_err());
        assert!(validate_weather_reading(&WeatherReading::new(f64::NAN, 50.0, 1000.0, 1.0)).is_err());
    }

    #[test]
    fn test_us_coordinates_valid() {
        let valid_coords = [
            (35.4676, -97.5164),  // Oklahoma City
            (61.2181, -149.9003), // Anchorage
            (21.3099, -157.8581), // Honolulu
            (-90.0, 180.0),
        ];

        for (lat, lon) in valid_coords {
            assert!(validate_coordinates(lat, lon).is_ok());
        }
        assert!(validate_coordinates(90.5, 0.0).is_err());
        assert!(validate_coordinates(0.0, -180.5).is_err());
    }

    #[test]
    fn test_location_validation() {
        assert!(validate_location("Tulsa, OK").is_ok());
        assert!(validate_location("  ").is_err());
        assert!(validate_location("ok").is_err());
        assert!(validate_location("90210").is_err());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    /// Any f64, including NaN and infinities
    fn wild_value() -> impl Strategy<Value = f64> {
        prop_oneof![
            any::<f64>(),
            Just(f64::NAN),
            Just(f64::INFINITY),
            Just(f64::NEG_INFINITY),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_sanitized_reading_is_finite_and_in_domain(
            t in wild_value(),
            h in wild_value(),
            p in wild_value(),
            w in wild_value(),
        ) {
            let clean = WeatherReading::new(t, h, p, w).sanitized();

            prop_assert!(clean.temperature_kelvin.is_finite());
            prop_assert!(clean.pressure_hpa.is_finite());
            prop_assert!((0.0..=100.0).contains(&clean.humidity_percent));
            prop_assert!(clean.wind_speed_mps >= 0.0 && clean.wind_speed_mps.is_finite());
        }

        #[test]
        fn prop_sanitize_keeps_finite_pressure(p in 800.0f64..1100.0) {
            let clean = WeatherReading::new(290.0, 50.0, p, 3.0).sanitized();
            prop_assert_eq!(clean.pressure_hpa, p);
        }

        #[test]
        fn prop_non_finite_pressure_becomes_mock(flip in any::<bool>()) {
            let p = if flip { f64::NAN } else { f64::INFINITY };
            let clean = WeatherReading::new(290.0, 50.0, p, 3.0).sanitized();
            prop_assert_eq!(clean.pressure_hpa, MOCK_PRESSURE_HPA);
        }

        #[test]
        fn prop_coordinates_in_range_validate(lat in -90.0f64..=90.0, lon in -180.0f64..=180.0) {
            prop_assert!(validate_coordinates(lat, lon).is_ok());
        }
    }
}

//! Regions where tornadoes are historically rare

use crate::types::Coordinates;

/// Multiplier applied to tornado probability inside a low-risk region
pub const REGIONAL_DAMPENING: f64 = 0.3;

/// Latitude/longitude rectangle, bounds inclusive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub name: &'static str,
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    pub fn contains(&self, coordinates: Coordinates) -> bool {
        (self.min_lat..=self.max_lat).contains(&coordinates.latitude)
            && (self.min_lon..=self.max_lon).contains(&coordinates.longitude)
    }
}

pub const LOW_TORNADO_RISK_REGIONS: [BoundingBox; 5] = [
    BoundingBox {
        name: "Northeast US",
        min_lat: 40.5,
        max_lat: 47.5,
        min_lon: -80.0,
        max_lon: -66.9,
    },
    BoundingBox {
        name: "West Coast",
        min_lat: 32.5,
        max_lat: 49.0,
        min_lon: -125.0,
        max_lon: -117.0,
    },
    // Montana, Idaho panhandle, Wyoming
    BoundingBox {
        name: "Northern Mountain States",
        min_lat: 44.0,
        max_lat: 49.0,
        min_lon: -117.0,
        max_lon: -104.0,
    },
    BoundingBox {
        name: "Alaska",
        min_lat: 51.0,
        max_lat: 71.5,
        min_lon: -180.0,
        max_lon: -129.0,
    },
    BoundingBox {
        name: "Hawaii",
        min_lat: 18.5,
        max_lat: 22.5,
        min_lon: -161.0,
        max_lon: -154.5,
    },
];

/// The low-risk region containing `coordinates`, if any
pub fn low_tornado_risk_region(coordinates: Coordinates) -> Option<&'static BoundingBox> {
    LOW_TORNADO_RISK_REGIONS
        .iter()
        .find(|region| region.contains(coordinates))
}

pub fn is_low_tornado_region(coordinates: Coordinates) -> bool {
    low_tornado_risk_region(coordinates).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_risk_cities() {
        let cases = [
            ("New York", 40.7128, -74.0060, "Northeast US"),
            ("Boston", 42.3601, -71.0589, "Northeast US"),
            ("Los Angeles", 34.0522, -118.2437, "West Coast"),
            ("Seattle", 47.6062, -122.3321, "West Coast"),
            ("Anchorage", 61.2181, -149.9003, "Alaska"),
            ("Honolulu", 21.3099, -157.8581, "Hawaii"),
        ];

        for (city, lat, lon, expected) in cases {
            let region = low_tornado_risk_region(Coordinates::new(lat, lon));
            assert_eq!(region.map(|r| r.name), Some(expected), "{}", city);
        }
    }

    #[test]
    fn test_tornado_alley_is_not_dampened() {
        let alley = [
            (35.4676, -97.5164), // Oklahoma City
            (37.6872, -97.3301), // Wichita
            (32.7767, -96.7970), // Dallas
            (41.2565, -95.9345), // Omaha
        ];

        for (lat, lon) in alley {
            assert!(!is_low_tornado_region(Coordinates::new(lat, lon)));
        }
    }
}

//! Global disaster statistics

use serde::{Deserialize, Serialize};

/// Annual figures for one disaster type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GlobalStats {
    pub count: u32,
    pub deaths: u32,
    pub injuries: u32,
    #[serde(alias = "damage")]
    pub damage_billions_usd: f64,
}

/// Annual figures for every disaster type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GlobalStatsData {
    pub tornado: GlobalStats,
    pub earthquake: GlobalStats,
    pub wildfire: GlobalStats,
    pub flood: GlobalStats,
}

impl GlobalStatsData {
    /// Reference averages shown on the dashboard
    pub const REFERENCE: GlobalStatsData = GlobalStatsData {
        // US tornadoes per year
        tornado: GlobalStats {
            count: 1250,
            deaths: 60,
            injuries: 1500,
            damage_billions_usd: 1.5,
        },
        // Worldwide earthquakes per year
        earthquake: GlobalStats {
            count: 20000,
            deaths: 2000,
            injuries: 5000,
            damage_billions_usd: 5.0,
        },
        // US wildfires per year
        wildfire: GlobalStats {
            count: 50000,
            deaths: 100,
            injuries: 2000,
            damage_billions_usd: 2.0,
        },
        // Significant floods worldwide per year
        flood: GlobalStats {
            count: 1000,
            deaths: 5000,
            injuries: 10000,
            damage_billions_usd: 10.0,
        },
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_serializes_with_unit_in_name() {
        let json = serde_json::to_value(GlobalStatsData::REFERENCE).unwrap();
        assert_eq!(json["tornado"]["damage_billions_usd"], 1.5);
        assert!(json["tornado"].get("damage").is_none());
    }

    #[test]
    fn test_legacy_damage_key_still_reads() {
        let json = r#"{"count":1,"deaths":2,"injuries":3,"damage":0.5}"#;
        let stats: GlobalStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.damage_billions_usd, 0.5);
    }
}

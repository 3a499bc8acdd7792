//! Structured METAR observation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Feet to meters
pub const FEET_TO_METERS: f64 = 0.3048;

/// Cloud cover amount as reported in a METAR sky condition group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CloudCover {
    /// Few, 1-2 oktas
    Few,
    /// Scattered, 3-4 oktas
    Sct,
    /// Broken, 5-7 oktas
    Bkn,
    /// Overcast, 8 oktas
    Ovc,
}

impl CloudCover {
    /// Parse the three-letter METAR code
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "FEW" => Some(CloudCover::Few),
            "SCT" => Some(CloudCover::Sct),
            "BKN" => Some(CloudCover::Bkn),
            "OVC" => Some(CloudCover::Ovc),
            _ => None,
        }
    }

    /// Density weight used when averaging layers
    #[must_use]
    pub fn density(self) -> f64 {
        match self {
            CloudCover::Few => 0.3,
            CloudCover::Sct => 0.5,
            CloudCover::Bkn => 0.7,
            CloudCover::Ovc => 1.0,
        }
    }
}

impl fmt::Display for CloudCover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CloudCover::Few => write!(f, "FEW"),
            CloudCover::Sct => write!(f, "SCT"),
            CloudCover::Bkn => write!(f, "BKN"),
            CloudCover::Ovc => write!(f, "OVC"),
        }
    }
}

/// One reported cloud layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CloudLayer {
    pub cover: CloudCover,
    /// Layer base above ground in feet
    pub height_ft: f64,
}

impl CloudLayer {
    /// Layer base in meters
    #[must_use]
    pub fn height_m(&self) -> f64 {
        self.height_ft * FEET_TO_METERS
    }
}

/// Weather observed at one station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Wind direction in degrees (0-359); 0 when calm, 180 when variable
    pub wind_direction_deg: u16,
    /// True when the report gave `VRB` instead of a direction
    pub variable_wind: bool,
    /// Sustained wind in knots
    pub wind_speed_kt: f64,
    /// Gust speed in knots, equal to the sustained wind when no gust was reported
    pub gust_speed_kt: f64,
    /// Prevailing visibility in meters
    pub visibility_m: f64,
    /// Cloud layers in report order; empty means clear sky
    pub cloud_layers: Vec<CloudLayer>,
}

impl Observation {
    /// Gust spread above the sustained wind, never negative
    #[must_use]
    pub fn gust_excess_kt(&self) -> f64 {
        (self.gust_speed_kt - self.wind_speed_kt).max(0.0)
    }

    #[must_use]
    pub fn is_calm(&self) -> bool {
        self.wind_speed_kt == 0.0 && !self.variable_wind
    }

    #[must_use]
    pub fn is_clear_sky(&self) -> bool {
        self.cloud_layers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cloud_cover_codes() {
        assert_eq!(CloudCover::from_code("BKN"), Some(CloudCover::Bkn));
        assert_eq!(CloudCover::from_code("NSC"), None);
        assert_eq!(CloudCover::Ovc.to_string(), "OVC");
        assert_eq!(CloudCover::Few.density(), 0.3);
    }

    #[test]
    fn test_layer_height_in_meters() {
        let layer = CloudLayer {
            cover: CloudCover::Sct,
            height_ft: 2500.0,
        };
        assert!((layer.height_m() - 762.0).abs() < 1e-9);
    }

    #[test]
    fn test_gust_excess() {
        let obs = Observation {
            wind_direction_deg: 270,
            variable_wind: false,
            wind_speed_kt: 15.0,
            gust_speed_kt: 25.0,
            visibility_m: 9999.0,
            cloud_layers: vec![],
        };
        assert_eq!(obs.gust_excess_kt(), 10.0);
        assert!(obs.is_clear_sky());
        assert!(!obs.is_calm());
    }
}

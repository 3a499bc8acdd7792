//! Aircraft position model

use serde::{Deserialize, Serialize};

/// Resolved aircraft position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Latitude in decimal degrees
    pub latitude_deg: f64,
    /// Longitude in decimal degrees
    pub longitude_deg: f64,
    /// Altitude in meters (spherical approximation, see `geodesy`)
    pub altitude_m: f64,
    /// Ground speed in knots
    pub ground_speed_kt: f64,
}

impl Position {
    /// Format position as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude_deg, self.longitude_deg)
    }

    /// Altitude in feet
    #[must_use]
    pub fn altitude_ft(&self) -> f64 {
        self.altitude_m / crate::models::observation::FEET_TO_METERS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_coordinates() {
        let position = Position {
            latitude_deg: 47.464_722,
            longitude_deg: 8.549_167,
            altitude_m: 3048.0,
            ground_speed_kt: 250.0,
        };
        assert_eq!(position.format_coordinates(), "47.4647, 8.5492");
        assert!((position.altitude_ft() - 10_000.0).abs() < 1e-6);
    }
}

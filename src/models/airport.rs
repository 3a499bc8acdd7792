//! Airport catalog records

use serde::{Deserialize, Serialize};
use std::fmt;

/// True for a four-character alphanumeric station identifier
#[must_use]
pub fn is_icao_code(ident: &str) -> bool {
    ident.len() == 4 && ident.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Airport type as published by the OurAirports catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum AirportCategory {
    LargeAirport,
    MediumAirport,
    SmallAirport,
    Heliport,
    SeaplaneBase,
    Balloonport,
    /// Closed fields and any type the catalog adds later
    Closed,
}

impl AirportCategory {
    /// Only fixed-wing airports of some size are useful weather stations
    #[must_use]
    pub fn is_eligible(self) -> bool {
        matches!(
            self,
            AirportCategory::LargeAirport
                | AirportCategory::MediumAirport
                | AirportCategory::SmallAirport
        )
    }
}

impl From<String> for AirportCategory {
    fn from(value: String) -> Self {
        match value.as_str() {
            "large_airport" => AirportCategory::LargeAirport,
            "medium_airport" => AirportCategory::MediumAirport,
            "small_airport" => AirportCategory::SmallAirport,
            "heliport" => AirportCategory::Heliport,
            "seaplane_base" => AirportCategory::SeaplaneBase,
            "balloonport" => AirportCategory::Balloonport,
            _ => AirportCategory::Closed,
        }
    }
}

impl fmt::Display for AirportCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AirportCategory::LargeAirport => write!(f, "large"),
            AirportCategory::MediumAirport => write!(f, "medium"),
            AirportCategory::SmallAirport => write!(f, "small"),
            AirportCategory::Heliport => write!(f, "heliport"),
            AirportCategory::SeaplaneBase => write!(f, "seaplane base"),
            AirportCategory::Balloonport => write!(f, "balloonport"),
            AirportCategory::Closed => write!(f, "closed"),
        }
    }
}

/// One usable runway direction, e.g. "27L" at 268°
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunwayEnd {
    pub designator: String,
    /// True heading in degrees
    pub heading_deg: f64,
}

/// Airport record from the static catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    /// ICAO identifier
    #[serde(rename = "ident")]
    pub icao: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub category: AirportCategory,
    #[serde(default)]
    pub latitude_deg: Option<f64>,
    #[serde(default)]
    pub longitude_deg: Option<f64>,
    #[serde(default)]
    pub runways: Vec<RunwayEnd>,
}

impl Airport {
    /// Create an airport with known coordinates and no runway data
    #[must_use]
    pub fn new(icao: &str, latitude_deg: f64, longitude_deg: f64, category: AirportCategory) -> Self {
        Self {
            icao: icao.to_string(),
            name: None,
            category,
            latitude_deg: Some(latitude_deg),
            longitude_deg: Some(longitude_deg),
            runways: Vec::new(),
        }
    }

    /// Attach runway ends
    #[must_use]
    pub fn with_runways(mut self, runways: Vec<RunwayEnd>) -> Self {
        self.runways = runways;
        self
    }

    /// Whether the ident can be used to request a station report.
    ///
    /// Local identifiers such as `CH-0012` have no METAR.
    #[must_use]
    pub fn has_icao_code(&self) -> bool {
        is_icao_code(&self.icao)
    }

    /// Coordinates if both are present
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.latitude_deg?, self.longitude_deg?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_catalog_names() {
        assert_eq!(
            AirportCategory::from("large_airport".to_string()),
            AirportCategory::LargeAirport
        );
        assert_eq!(
            AirportCategory::from("spaceport".to_string()),
            AirportCategory::Closed
        );
        assert!(AirportCategory::SmallAirport.is_eligible());
        assert!(!AirportCategory::Heliport.is_eligible());
    }

    #[test]
    fn test_deserialize_record() {
        let json = r#"{
            "ident": "LSZH",
            "name": "Zurich Airport",
            "type": "large_airport",
            "latitude_deg": 47.464699,
            "longitude_deg": 8.54917,
            "runways": [{"designator": "14", "heading_deg": 137.0}]
        }"#;
        let airport: Airport = serde_json::from_str(json).unwrap();
        assert_eq!(airport.icao, "LSZH");
        assert_eq!(airport.category, AirportCategory::LargeAirport);
        assert_eq!(airport.runways.len(), 1);
        assert!(airport.coordinates().is_some());
    }

    #[test]
    fn test_icao_code_shape() {
        assert!(is_icao_code("LSZH"));
        assert!(is_icao_code("K1G4"));
        assert!(!is_icao_code("CH-0012"));
        assert!(!is_icao_code("00CA1"));
        assert!(!Airport::new("US-1234", 0.0, 0.0, AirportCategory::SmallAirport).has_icao_code());
    }

    #[test]
    fn test_missing_coordinates() {
        let json = r#"{"ident": "XXXX", "type": "small_airport", "latitude_deg": 10.0}"#;
        let airport: Airport = serde_json::from_str(json).unwrap();
        assert!(airport.coordinates().is_none());
        assert!(airport.runways.is_empty());
    }
}

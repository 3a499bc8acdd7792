//! Nearest-airport search

use crate::error::FlightWxError;
use crate::models::Airport;
use haversine::{Location as HaversineLocation, Units, distance};
use serde::Serialize;
use tracing::{debug, info};

/// Result of a nearest-airport search
#[derive(Debug, Clone, Serialize)]
pub struct NearestAirport<'a> {
    pub airport: &'a Airport,
    /// Planar distance in degree-space, the metric the search ranks by
    pub distance_deg: f64,
    /// Great-circle distance for display only
    pub distance_km: f64,
}

/// Planar distance in degrees between two lat/lon pairs.
///
/// Deliberately not great-circle: longitude degrees are not scaled by
/// latitude. Good enough at the short ranges this is used for, and the
/// ranking must stay stable for existing users.
#[must_use]
pub fn planar_distance_deg(lat: f64, lon: f64, other_lat: f64, other_lon: f64) -> f64 {
    ((other_lat - lat).powi(2) + (other_lon - lon).powi(2)).sqrt()
}

fn great_circle_km(lat: f64, lon: f64, other_lat: f64, other_lon: f64) -> f64 {
    distance(
        HaversineLocation {
            latitude: lat,
            longitude: lon,
        },
        HaversineLocation {
            latitude: other_lat,
            longitude: other_lon,
        },
        Units::Kilometers,
    )
}

/// Find the closest large, medium or small airport with known coordinates
/// and an ICAO identifier.
///
/// The first airport with the strictly smallest distance wins, so ties go
/// to catalog order.
pub fn nearest<'a>(lat: f64, lon: f64, catalog: &'a [Airport]) -> crate::Result<NearestAirport<'a>> {
    let mut best: Option<(&Airport, f64)> = None;

    for airport in catalog
        .iter()
        .filter(|a| a.category.is_eligible() && a.has_icao_code())
    {
        let Some((airport_lat, airport_lon)) = airport.coordinates() else {
            continue;
        };
        let d = planar_distance_deg(lat, lon, airport_lat, airport_lon);
        match best {
            Some((_, best_distance)) if d >= best_distance => {}
            _ => best = Some((airport, d)),
        }
    }

    let Some((airport, distance_deg)) = best else {
        debug!("No eligible airport among {} catalog entries", catalog.len());
        return Err(FlightWxError::resolution(format!(
            "no eligible airport near ({lat:.4}, {lon:.4})"
        )));
    };

    let distance_km = airport
        .coordinates()
        .map_or(0.0, |(a_lat, a_lon)| great_circle_km(lat, lon, a_lat, a_lon));

    info!(
        "Nearest airport to ({:.4}, {:.4}) is {} ({}), {:.1} km",
        lat, lon, airport.icao, airport.category, distance_km
    );

    Ok(NearestAirport {
        airport,
        distance_deg,
        distance_km,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AirportCategory;

    fn airport(icao: &str, lat: f64, lon: f64) -> Airport {
        Airport::new(icao, lat, lon, AirportCategory::MediumAirport)
    }

    #[test]
    fn test_nearest_basic() {
        let catalog = vec![airport("A", 0.0, 0.0), airport("B", 10.0, 10.0)];
        let result = nearest(1.0, 1.0, &catalog).unwrap();
        assert_eq!(result.airport.icao, "A");
        assert!((result.distance_deg - 2f64.sqrt()).abs() < 1e-12);
        assert!(result.distance_km > 150.0 && result.distance_km < 160.0);
    }

    #[test]
    fn test_tie_goes_to_first() {
        let catalog = vec![airport("EAST", 0.0, 1.0), airport("WEST", 0.0, -1.0)];
        assert_eq!(nearest(0.0, 0.0, &catalog).unwrap().airport.icao, "EAST");

        let reversed = vec![airport("WEST", 0.0, -1.0), airport("EAST", 0.0, 1.0)];
        assert_eq!(nearest(0.0, 0.0, &reversed).unwrap().airport.icao, "WEST");
    }

    #[test]
    fn test_ineligible_and_incomplete_are_skipped() {
        let mut no_coords = airport("NOCO", 0.0, 0.0);
        no_coords.longitude_deg = None;
        let catalog = vec![
            Airport::new("HELI", 0.0, 0.0, AirportCategory::Heliport),
            Airport::new("SHUT", 0.1, 0.1, AirportCategory::Closed),
            no_coords,
            Airport::new("FAR1", 5.0, 5.0, AirportCategory::SmallAirport),
        ];
        assert_eq!(nearest(0.0, 0.0, &catalog).unwrap().airport.icao, "FAR1");
    }

    #[test]
    fn test_local_identifiers_are_skipped() {
        let catalog = vec![airport("CH-0012", 0.0, 0.0), airport("LSZH", 3.0, 3.0)];
        assert_eq!(nearest(0.0, 0.0, &catalog).unwrap().airport.icao, "LSZH");
    }

    #[test]
    fn test_planar_not_great_circle() {
        // at 60°N a degree of longitude is half a degree of latitude in km,
        // but the planar metric treats them alike
        let catalog = vec![airport("NRTH", 61.1, 10.0), airport("EAST", 60.0, 11.0)];
        let result = nearest(60.0, 10.0, &catalog).unwrap();
        assert_eq!(result.airport.icao, "EAST");
    }

    #[test]
    fn test_empty_catalog_is_resolution_failure() {
        let result = nearest(0.0, 0.0, &[]);
        assert!(matches!(result, Err(FlightWxError::ResolutionFailure { .. })));
    }
}

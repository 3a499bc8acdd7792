//! Geodetic position resolution
//!
//! Converts Earth-Centered, Earth-Fixed (ECEF) position and velocity
//! vectors, as exported by the simulator, into latitude, longitude,
//! altitude and ground speed.

pub mod fix;

pub use fix::PositionFix;

use crate::models::Position;
use serde::{Deserialize, Serialize};

/// WGS84 semi-major axis in meters
pub const WGS84_A: f64 = 6_378_137.0;
/// WGS84 first eccentricity squared
pub const WGS84_E2: f64 = 0.006_694_379_990_14;
/// Meters per second to knots
pub const MPS_TO_KNOTS: f64 = 1.94384;

/// Fixed number of latitude refinement passes
const LATITUDE_ITERATIONS: usize = 5;

/// Geodetic latitude/longitude in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geodetic {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

/// Convert ECEF meters to geodetic latitude/longitude on WGS84.
///
/// Latitude is refined a fixed five times from the `p·(1 − e²)` seed. The
/// pass count is not convergence-checked; at WGS84 eccentricity five passes
/// are well below a millimeter.
#[must_use]
pub fn ecef_to_geodetic(x: f64, y: f64, z: f64) -> Geodetic {
    let longitude = y.atan2(x);
    let p = x.hypot(y);

    let mut latitude = z.atan2(p * (1.0 - WGS84_E2));
    for _ in 0..LATITUDE_ITERATIONS {
        let sin_lat = latitude.sin();
        let n = WGS84_A / (1.0 - WGS84_E2 * sin_lat * sin_lat).sqrt();
        latitude = (z + WGS84_E2 * n * sin_lat).atan2(p);
    }

    Geodetic {
        latitude_deg: latitude.to_degrees(),
        longitude_deg: longitude.to_degrees(),
    }
}

fn norm(v: [f64; 3]) -> f64 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

/// Resolve an ECEF position (m) and velocity (m/s) into a [`Position`].
///
/// Altitude is `|position| − a`: distance from the earth's center minus the
/// equatorial radius. This is a spherical surrogate, not ellipsoidal height,
/// and reads high toward the poles (about 21 km at 90°). Consumers depend on
/// these numbers, so it stays as is.
#[must_use]
pub fn resolve_position(position: [f64; 3], velocity: [f64; 3]) -> Position {
    let geodetic = ecef_to_geodetic(position[0], position[1], position[2]);
    let altitude_m = norm(position) - WGS84_A;
    let ground_speed_kt = norm(velocity) * MPS_TO_KNOTS;

    tracing::debug!(
        "Resolved ECEF {:?} to ({:.4}, {:.4}) alt {:.0} m, {:.0} kt",
        position,
        geodetic.latitude_deg,
        geodetic.longitude_deg,
        altitude_m,
        ground_speed_kt
    );

    Position {
        latitude_deg: geodetic.latitude_deg,
        longitude_deg: geodetic.longitude_deg,
        altitude_m,
        ground_speed_kt,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEG_EPS: f64 = 1e-9;

    /// Forward conversion for round-trip checks at zero height
    fn geodetic_to_ecef(lat_deg: f64, lon_deg: f64) -> [f64; 3] {
        let (lat, lon) = (lat_deg.to_radians(), lon_deg.to_radians());
        let n = WGS84_A / (1.0 - WGS84_E2 * lat.sin().powi(2)).sqrt();
        [
            n * lat.cos() * lon.cos(),
            n * lat.cos() * lon.sin(),
            n * (1.0 - WGS84_E2) * lat.sin(),
        ]
    }

    #[test]
    fn test_equator_prime_meridian() {
        let geodetic = ecef_to_geodetic(WGS84_A, 0.0, 0.0);
        assert!(geodetic.latitude_deg.abs() < DEG_EPS);
        assert!(geodetic.longitude_deg.abs() < DEG_EPS);
    }

    #[test]
    fn test_equator_east() {
        let geodetic = ecef_to_geodetic(0.0, WGS84_A, 0.0);
        assert!(geodetic.latitude_deg.abs() < DEG_EPS);
        assert!((geodetic.longitude_deg - 90.0).abs() < DEG_EPS);
    }

    #[test]
    fn test_mid_latitude_surface_point() {
        let [x, y, z] = geodetic_to_ecef(47.4647, 8.5492);
        let geodetic = ecef_to_geodetic(x, y, z);
        assert!((geodetic.latitude_deg - 47.4647).abs() < 1e-8);
        assert!((geodetic.longitude_deg - 8.5492).abs() < DEG_EPS);
    }

    #[test]
    fn test_southern_western_hemisphere() {
        let [x, y, z] = geodetic_to_ecef(-33.9461, -151.1772);
        let geodetic = ecef_to_geodetic(x, y, z);
        assert!((geodetic.latitude_deg + 33.9461).abs() < 1e-8);
        assert!((geodetic.longitude_deg + 151.1772).abs() < DEG_EPS);
    }

    #[test]
    fn test_resolve_position_altitude_and_speed() {
        let position = resolve_position([WGS84_A + 1000.0, 0.0, 0.0], [0.0, 100.0, 0.0]);
        assert!((position.altitude_m - 1000.0).abs() < 1e-6);
        assert!((position.ground_speed_kt - 194.384).abs() < 1e-9);
        assert!(position.latitude_deg.abs() < DEG_EPS);
    }

    #[test]
    fn test_altitude_is_spherical_surrogate() {
        // a surface point off the equator sits inside the equatorial sphere
        let surface = geodetic_to_ecef(60.0, 10.0);
        let position = resolve_position(surface, [0.0, 0.0, 0.0]);
        assert!(position.altitude_m < -10_000.0);
        assert_eq!(position.ground_speed_kt, 0.0);
    }
}

//! Airport resolution
//!
//! - `catalog`: the static airport catalog and its refresh policy
//! - `nearest`: closest eligible airport to a position
//! - `runway`: runway suggestion from wind direction

pub mod catalog;
pub mod nearest;
pub mod runway;

pub use catalog::{AirportCatalog, CatalogStore};
pub use nearest::{NearestAirport, nearest, planar_distance_deg};
pub use runway::{angular_difference, preferred_runway_number, select_runway};

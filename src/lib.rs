//! `flightwx` - METAR-driven weather for flight simulators
//!
//! This library parses METAR reports, derives a normalized atmospheric
//! state from them, blends origin and destination weather, and resolves the
//! aircraft's position to the nearest airport for en-route weather.

pub mod airport;
pub mod atmosphere;
pub mod clock;
pub mod config;
pub mod error;
pub mod geodesy;
pub mod logging;
pub mod metar;
pub mod models;
pub mod weather;

// Re-export core types for public API
pub use airport::{AirportCatalog, CatalogStore, NearestAirport, nearest};
pub use atmosphere::{blend, normalize};
pub use clock::SimTime;
pub use config::FlightWxConfig;
pub use error::FlightWxError;
pub use geodesy::{PositionFix, ecef_to_geodetic, resolve_position};
pub use models::{Airport, NormalizedState, Observation, Position};
pub use weather::{MetarClient, ReportSource, StationWeather, WeatherService};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, FlightWxError>;

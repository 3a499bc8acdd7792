//! Weather scenarios
//!
//! Wires report acquisition, parsing, normalization and blending into the
//! three scenarios the tool supports: a single station, a route between two
//! stations, and cruise (weather at the airport nearest the aircraft).
//! A station with no report gets the clear-weather state.

pub mod fetch;

pub use fetch::{MetarClient, ReportSource, validate_icao};

use crate::airport::{AirportCatalog, nearest, preferred_runway_number, select_runway};
use crate::atmosphere::{blend, normalize};
use crate::geodesy::PositionFix;
use crate::metar;
use crate::models::{NormalizedState, Position, RunwayEnd};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Where a station's state came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateSource {
    /// Derived from a fetched report
    Observed,
    /// No report was available; clear weather substituted
    Fallback,
}

/// Weather state for one station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationWeather {
    pub icao: String,
    pub state: NormalizedState,
    pub source: StateSource,
}

/// Origin, destination and their blend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteWeather {
    pub origin: StationWeather,
    pub destination: StationWeather,
    pub blended: NormalizedState,
}

/// Weather around the aircraft's current position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CruiseWeather {
    pub position: Position,
    pub distance_deg: f64,
    pub distance_km: f64,
    /// Runway number aligned with the wind, e.g. "27"
    pub preferred_runway: String,
    /// Best matching runway end, when the catalog lists runways
    pub runway: Option<RunwayEnd>,
    pub station: StationWeather,
}

/// Runs weather scenarios against a report source
pub struct WeatherService<S: ReportSource> {
    source: S,
}

impl<S: ReportSource> WeatherService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Weather at one station for `month` (1-12).
    ///
    /// # Errors
    ///
    /// `Validation` for malformed ICAO codes. An unavailable report is not an
    /// error: it yields clear weather with [`StateSource::Fallback`].
    pub fn station(&self, icao: &str, month: u32) -> crate::Result<StationWeather> {
        let icao = validate_icao(icao)?;

        match self.source.fetch(&icao) {
            Ok(raw) => {
                let observation = metar::parse(&raw);
                let state = normalize(&observation, month);
                info!("{}: {}", icao, raw);
                Ok(StationWeather {
                    icao,
                    state,
                    source: StateSource::Observed,
                })
            }
            Err(e) if e.is_fetch_unavailable() => {
                warn!("{}", e.user_message());
                Ok(StationWeather {
                    icao,
                    state: NormalizedState::clear_weather(),
                    source: StateSource::Fallback,
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Weather at both ends of a route and their average
    pub fn route(&self, origin: &str, destination: &str, month: u32) -> crate::Result<RouteWeather> {
        let origin = self.station(origin, month)?;
        let destination = self.station(destination, month)?;
        let blended = blend(&origin.state, &destination.state);

        Ok(RouteWeather {
            origin,
            destination,
            blended,
        })
    }

    /// Weather at the airport nearest to the aircraft.
    ///
    /// # Errors
    ///
    /// `ResolutionFailure` when the catalog holds no eligible airport.
    pub fn cruise(
        &self,
        fix: &PositionFix,
        catalog: &AirportCatalog,
        month: u32,
    ) -> crate::Result<CruiseWeather> {
        let position = fix.resolve();
        info!(
            "Aircraft at {}, {:.0} ft, {:.0} kt",
            position.format_coordinates(),
            position.altitude_ft(),
            position.ground_speed_kt
        );

        let found = nearest(position.latitude_deg, position.longitude_deg, catalog.airports())?;
        let station = self.station(&found.airport.icao, month)?;

        let wind_direction = station.state.wind_direction_deg.rem_euclid(360);
        let preferred_runway = preferred_runway_number(wind_direction.unsigned_abs());
        let runway = select_runway(f64::from(wind_direction), &found.airport.runways).cloned();

        Ok(CruiseWeather {
            position,
            distance_deg: found.distance_deg,
            distance_km: found.distance_km,
            preferred_runway,
            runway,
            station,
        })
    }
}

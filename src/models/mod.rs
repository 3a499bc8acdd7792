//! Data models for `flightwx`
//!
//! This module contains the value types passed between pipeline stages:
//! - Observation: what a METAR report says
//! - State: normalized atmospheric channels and the sink they are written to
//! - Position: resolved aircraft position
//! - Airport: catalog records and runway ends

pub mod airport;
pub mod observation;
pub mod position;
pub mod state;

// Re-export all public types for convenient access
pub use airport::{Airport, AirportCategory, RunwayEnd, is_icao_code};
pub use observation::{CloudCover, CloudLayer, Observation};
pub use position::Position;
pub use state::{NormalizedState, StateSink, apply_state};

//! METAR report parsing
//!
//! Turns one raw report line into an [`Observation`]. Parsing is total:
//! a field that is missing or fails the numeric check falls back to its
//! documented default instead of aborting.

mod parser;
mod safe_number;

pub use parser::{DEFAULT_VISIBILITY_M, parse, station};
pub use safe_number::{SafeNumber, safe_number};

pub use crate::models::{CloudCover, CloudLayer, Observation};

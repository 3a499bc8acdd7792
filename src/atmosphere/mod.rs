//! Atmospheric state derivation
//!
//! - `normalize`: maps an observation to bounded intensity channels with
//!   a seasonal correction
//! - `blend`: averages two states into one

pub mod blend;
pub mod normalize;

pub use blend::blend;
pub use normalize::{is_growing_season, normalize};

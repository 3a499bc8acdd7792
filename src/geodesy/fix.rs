//! Position fix file written by the simulator plugin

use crate::error::FlightWxError;
use crate::models::Position;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// ECEF position (m) and velocity (m/s) at one instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionFix {
    pub position: [f64; 3],
    pub velocity: [f64; 3],
}

impl PositionFix {
    /// Decode a fix from `{"position": [x, y, z], "velocity": [vx, vy, vz]}`
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let fix: PositionFix = serde_json::from_str(json)?;
        fix.validate()?;
        Ok(fix)
    }

    /// Read and decode a fix file
    pub fn load(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Reading position fix from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    fn validate(&self) -> crate::Result<()> {
        if self
            .position
            .iter()
            .chain(self.velocity.iter())
            .any(|component| !component.is_finite())
        {
            return Err(FlightWxError::validation(
                "Position fix contains non-finite components",
            ));
        }
        if self.position.iter().all(|component| *component == 0.0) {
            return Err(FlightWxError::validation(
                "Position fix is at the earth's center",
            ));
        }
        Ok(())
    }

    /// Resolve into latitude, longitude, altitude and ground speed
    #[must_use]
    pub fn resolve(&self) -> Position {
        super::resolve_position(self.position, self.velocity)
    }
}

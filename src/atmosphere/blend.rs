//! Averaging of two normalized states (origin/destination)

use crate::models::NormalizedState;

fn mean(a: f64, b: f64) -> f64 {
    (a + b) / 2.0
}

/// Channel-wise arithmetic mean of two states.
///
/// Direction uses integer division, so `(350 + 10) / 2 == 180`: the blend
/// is a plain average, not a circular one. Inputs are already bounded, so
/// the result needs no clamping.
#[must_use]
pub fn blend(a: &NormalizedState, b: &NormalizedState) -> NormalizedState {
    NormalizedState {
        wind_direction_deg: (a.wind_direction_deg + b.wind_direction_deg) / 2,
        wind_strength: mean(a.wind_strength, b.wind_strength),
        visibility: mean(a.visibility, b.visibility),
        cloud_height: mean(a.cloud_height, b.cloud_height),
        cloud_density: mean(a.cloud_density, b.cloud_density),
        turbulence: mean(a.turbulence, b.turbulence),
        cirrus_density: mean(a.cirrus_density, b.cirrus_density),
        cirrus_height: mean(a.cirrus_height, b.cirrus_height),
        thermal_activity: mean(a.thermal_activity, b.thermal_activity),
    }
}

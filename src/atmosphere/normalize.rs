//! Observation to normalized-state derivation

use crate::models::{NormalizedState, Observation};

/// Wind speed (kt) that saturates the wind channel
const WIND_SATURATION_KT: f64 = 40.0;
/// Visibility (m) beyond which the clarity curve stops rising
const VISIBILITY_SATURATION_M: f64 = 50_000.0;
const VISIBILITY_CURVE_RATE: f64 = 5.0;
/// Mean layer base (m) that saturates the cloud height channel
const CLOUD_HEIGHT_SATURATION_M: f64 = 3000.0;
/// Gust spread (kt) that saturates turbulence
const GUST_SATURATION_KT: f64 = 20.0;
const TURBULENCE_EXPONENT: f64 = 1.6;
const TURBULENCE_FLOOR: f64 = 0.1;
const CIRRUS_DENSITY_FLOOR: f64 = 0.05;

const WINTER_THERMAL_FACTOR: f64 = 0.8;
const WINTER_VISIBILITY_FACTOR: f64 = 0.9;

/// Months (1-12) with full-strength thermals and clear air
#[must_use]
pub fn is_growing_season(month: u32) -> bool {
    (3..=10).contains(&month)
}

/// Wind channel: linear up to 40 kt
#[must_use]
pub fn wind_strength(wind_speed_kt: f64) -> f64 {
    (wind_speed_kt / WIND_SATURATION_KT).clamp(0.0, 1.0)
}

/// Clarity channel: exponential saturation over 0-50 km
#[must_use]
pub fn visibility(visibility_m: f64) -> f64 {
    let fraction = (visibility_m / VISIBILITY_SATURATION_M).clamp(0.0, 1.0);
    (1.0 - (-VISIBILITY_CURVE_RATE * fraction).exp()).clamp(0.0, 1.0)
}

/// Turbulence channel from the gust spread, floored at 0.1
#[must_use]
pub fn turbulence(gust_excess_kt: f64) -> f64 {
    let excess = gust_excess_kt.max(0.0);
    (excess / GUST_SATURATION_KT)
        .powf(TURBULENCE_EXPONENT)
        .clamp(TURBULENCE_FLOOR, 1.0)
}

/// Derive the normalized state for an observation made in `month` (1-12).
#[must_use]
pub fn normalize(obs: &Observation, month: u32) -> NormalizedState {
    let wind_strength = wind_strength(obs.wind_speed_kt);
    let mut visibility = visibility(obs.visibility_m);

    let (cloud_density, cloud_height) = if obs.cloud_layers.is_empty() {
        (0.0, 0.0)
    } else {
        let count = obs.cloud_layers.len() as f64;
        let density = obs
            .cloud_layers
            .iter()
            .map(|layer| layer.cover.density())
            .sum::<f64>()
            / count;
        let mean_height_m = obs
            .cloud_layers
            .iter()
            .map(crate::models::CloudLayer::height_m)
            .sum::<f64>()
            / count;
        (density, (mean_height_m / CLOUD_HEIGHT_SATURATION_M).clamp(0.0, 1.0))
    };

    let turbulence = turbulence(obs.gust_excess_kt());

    let cirrus_density =
        (0.6 * (1.0 - visibility) + 0.4 * cloud_density).clamp(CIRRUS_DENSITY_FLOOR, 1.0);
    let cirrus_height = (3.0 * cloud_height).clamp(0.0, 1.0);
    let mut thermal_activity =
        (0.5 * cloud_density + 0.3 * wind_strength + 0.2 * (1.0 - visibility)).clamp(0.0, 1.0);

    // applied last; cirrus and thermals above use the uncorrected visibility
    if !is_growing_season(month) {
        thermal_activity *= WINTER_THERMAL_FACTOR;
        visibility *= WINTER_VISIBILITY_FACTOR;
    }

    NormalizedState {
        wind_direction_deg: i32::from(obs.wind_direction_deg),
        wind_strength,
        visibility,
        cloud_height,
        cloud_density,
        turbulence,
        cirrus_density,
        cirrus_height,
        thermal_activity,
    }
}

//! Runway suggestion from wind direction

use crate::models::RunwayEnd;

/// Angular difference between two headings, 0-180°
#[must_use]
pub fn angular_difference(a_deg: f64, b_deg: f64) -> f64 {
    let diff = (b_deg - a_deg).rem_euclid(360.0);
    diff.min(360.0 - diff)
}

/// Runway number best aligned with the wind, as two digits.
///
/// `(wind + 5) / 10` in integers on the direction reduced modulo 360, with
/// 0 wrapping to 36 and anything past 36 wrapping back to 01.
#[must_use]
pub fn preferred_runway_number(wind_direction_deg: u32) -> String {
    let number = match (wind_direction_deg % 360 + 5) / 10 % 36 {
        0 => 36,
        n => n,
    };
    format!("{number:02}")
}

/// Runway end whose heading is closest to the wind direction.
///
/// Ties go to the first listed end. `None` when the airport lists no runways.
#[must_use]
pub fn select_runway(wind_direction_deg: f64, runways: &[RunwayEnd]) -> Option<&RunwayEnd> {
    let mut best: Option<(&RunwayEnd, f64)> = None;
    for runway in runways {
        let diff = angular_difference(wind_direction_deg, runway.heading_deg);
        match best {
            Some((_, best_diff)) if diff >= best_diff => {}
            _ => best = Some((runway, diff)),
        }
    }
    best.map(|(runway, _)| runway)
}

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::safe_number::safe_number;
use crate::models::{CloudCover, CloudLayer, Observation};

/// Visibility used when the report has no usable visibility group
pub const DEFAULT_VISIBILITY_M: f64 = 9999.0;

const MPS_TO_KNOTS: f64 = 1.94384;
const STATUTE_MILE_M: f64 = 1609.344;
/// Direction assumed for `VRB` winds
const VARIABLE_DIRECTION_DEG: u16 = 180;

static STATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:(?:METAR|SPECI)\s+)?(?:COR\s+)?([A-Z][A-Z0-9]{3})\b").unwrap()
});

static WIND_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|\s)([0-9/]{3}|VRB)([0-9/]{2,3})(?:G([0-9/]{2,3}))?(KT|MPS)(?:\s|$)").unwrap()
});

static VISIBILITY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s)([0-9/]{4})(?:\s|$)").unwrap());

/// `10SM`, `P6SM`, `1/4SM`, `M1/4SM`, `1 1/2SM`
static STATUTE_MILES_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|\s)[MP]?(?:(\d{1,2})\s+)?(\d{1,2})(?:/(\d{1,2}))?SM(?:\s|$)").unwrap()
});

static CAVOK_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?:^|\s)CAVOK(?:\s|$)").unwrap());

static CLOUD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(FEW|SCT|BKN|OVC)(\d{3})").unwrap());

/// Extract the reporting station from a raw report, if it has one
#[must_use]
pub fn station(raw: &str) -> Option<String> {
    STATION_REGEX
        .captures(raw)
        .map(|caps| caps[1].to_string())
}

/// Parse one raw METAR line.
///
/// Never fails. Remarks (`RMK` and everything after it) are ignored so
/// that remark groups cannot be mistaken for visibility or cloud groups.
#[must_use]
pub fn parse(raw: &str) -> Observation {
    let body = strip_remarks(raw);

    let (wind_direction_deg, variable_wind, wind_speed_kt, gust_speed_kt) = parse_wind(body);
    let visibility_m = parse_visibility(body);
    let cloud_layers = parse_clouds(body);

    let observation = Observation {
        wind_direction_deg,
        variable_wind,
        wind_speed_kt,
        gust_speed_kt,
        visibility_m,
        cloud_layers,
    };

    debug!(
        station = station(raw).as_deref().unwrap_or("----"),
        "Parsed observation: {:?}", observation
    );
    observation
}

fn strip_remarks(raw: &str) -> &str {
    match raw.find(" RMK") {
        Some(index) => &raw[..index],
        None => raw,
    }
}

/// Returns (direction, variable, speed kt, gust kt)
fn parse_wind(body: &str) -> (u16, bool, f64, f64) {
    let Some(caps) = WIND_REGEX.captures(body) else {
        debug!("No wind group, assuming calm");
        return (0, false, 0.0, 0.0);
    };

    let unit_factor = match &caps[4] {
        "MPS" => MPS_TO_KNOTS,
        _ => 1.0,
    };

    let variable_wind = &caps[1] == "VRB";
    let direction = if variable_wind {
        VARIABLE_DIRECTION_DEG
    } else {
        safe_number(Some(&caps[1]), 0u16).value() % 360
    };

    let speed = safe_number(Some(&caps[2]), 0.0f64).value() * unit_factor;
    let gust = match caps.get(3) {
        Some(gust) => safe_number(Some(gust.as_str()), speed / unit_factor).value() * unit_factor,
        None => speed,
    };

    (direction, variable_wind, speed, gust.max(speed))
}

fn parse_visibility(body: &str) -> f64 {
    if let Some(caps) = VISIBILITY_REGEX.captures(body) {
        return safe_number(caps.get(1).map(|m| m.as_str()), DEFAULT_VISIBILITY_M).value();
    }

    if CAVOK_REGEX.is_match(body) {
        return DEFAULT_VISIBILITY_M;
    }

    if let Some(miles) = STATUTE_MILES_REGEX.captures(body).and_then(|caps| statute_miles(&caps)) {
        return miles * STATUTE_MILE_M;
    }

    DEFAULT_VISIBILITY_M
}

/// Whole, fractional or mixed statute miles; `None` for a zero denominator
fn statute_miles(caps: &regex::Captures<'_>) -> Option<f64> {
    let whole = safe_number(caps.get(1).map(|m| m.as_str()), 0.0f64).value();
    let numerator = safe_number(caps.get(2).map(|m| m.as_str()), 0.0f64);
    if numerator.is_default() {
        return None;
    }

    let fraction = match caps.get(3) {
        Some(denominator) => {
            let denominator = safe_number(Some(denominator.as_str()), 0.0f64).value();
            if denominator == 0.0 {
                return None;
            }
            numerator.value() / denominator
        }
        None => numerator.value(),
    };

    Some(whole + fraction)
}

fn parse_clouds(body: &str) -> Vec<CloudLayer> {
    CLOUD_REGEX
        .captures_iter(body)
        .filter_map(|caps| {
            let cover = CloudCover::from_code(&caps[1])?;
            let hundreds_ft = safe_number(Some(&caps[2]), 0.0f64).value();
            Some(CloudLayer {
                cover,
                height_ft: hundreds_ft * 100.0,
            })
        })
        .collect()
}

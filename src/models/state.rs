//! Normalized atmospheric state and the field sink it is persisted through

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of named fields a state is persisted as
pub const FIELD_COUNT: usize = 9;

/// Atmospheric state with every channel except direction in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedState {
    /// Wind direction in degrees, passed through unclamped
    pub wind_direction_deg: i32,
    pub wind_strength: f64,
    pub visibility: f64,
    pub cloud_height: f64,
    pub cloud_density: f64,
    pub turbulence: f64,
    pub cirrus_density: f64,
    pub cirrus_height: f64,
    pub thermal_activity: f64,
}

impl NormalizedState {
    /// State used when no report could be fetched for a station
    #[must_use]
    pub fn clear_weather() -> Self {
        Self {
            wind_direction_deg: 0,
            wind_strength: 0.0,
            visibility: 1.0,
            cloud_height: 1.0,
            cloud_density: 0.0,
            turbulence: 0.1,
            cirrus_density: 0.05,
            cirrus_height: 1.0,
            thermal_activity: 0.2,
        }
    }

    /// Named fields in persistence order
    #[must_use]
    pub fn fields(&self) -> [(&'static str, f64); FIELD_COUNT] {
        [
            ("wind_direction", f64::from(self.wind_direction_deg)),
            ("wind_strength", self.wind_strength),
            ("visibility", self.visibility),
            ("cloud_height", self.cloud_height),
            ("cloud_density", self.cloud_density),
            ("turbulence", self.turbulence),
            ("cirrus_density", self.cirrus_density),
            ("cirrus_height", self.cirrus_height),
            ("thermal_activity", self.thermal_activity),
        ]
    }

    /// True when every bounded channel lies in `[0, 1]`
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.fields()
            .iter()
            .skip(1)
            .all(|(_, value)| (0.0..=1.0).contains(value))
    }
}

/// Key-value store a consuming layer persists states into.
pub trait StateSink {
    /// Store `value` under `key`, returning whether the stored value changed
    fn set_field(&mut self, key: &str, value: f64) -> bool;
}

impl StateSink for BTreeMap<String, f64> {
    fn set_field(&mut self, key: &str, value: f64) -> bool {
        match self.get(key) {
            Some(existing) if *existing == value => false,
            _ => {
                self.insert(key.to_string(), value);
                true
            }
        }
    }
}

/// Write every field of `state` into `sink`, returning how many changed.
///
/// Fields are written independently, so applying the same state twice
/// leaves the sink untouched the second time.
pub fn apply_state<S: StateSink + ?Sized>(sink: &mut S, state: &NormalizedState) -> usize {
    let mut changed = 0;
    for (key, value) in state.fields() {
        if sink.set_field(key, value) {
            tracing::debug!("Field {} set to {:.4}", key, value);
            changed += 1;
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_weather_values() {
        let state = NormalizedState::clear_weather();
        assert_eq!(state.wind_direction_deg, 0);
        assert_eq!(state.visibility, 1.0);
        assert_eq!(state.turbulence, 0.1);
        assert_eq!(state.cirrus_density, 0.05);
        assert_eq!(state.thermal_activity, 0.2);
        assert!(state.is_bounded());
    }

    #[test]
    fn test_fields_are_unique() {
        let state = NormalizedState::clear_weather();
        let keys: std::collections::BTreeSet<_> = state.fields().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys.len(), FIELD_COUNT);
    }

    #[test]
    fn test_apply_state_is_idempotent() {
        let mut sink: BTreeMap<String, f64> = BTreeMap::new();
        let state = NormalizedState::clear_weather();

        assert_eq!(apply_state(&mut sink, &state), FIELD_COUNT);
        assert_eq!(apply_state(&mut sink, &state), 0);
        assert_eq!(sink.get("cirrus_height"), Some(&1.0));
    }

    #[test]
    fn test_apply_state_counts_changed_fields() {
        let mut sink: BTreeMap<String, f64> = BTreeMap::new();
        let mut state = NormalizedState::clear_weather();
        apply_state(&mut sink, &state);

        state.wind_direction_deg = 270;
        state.wind_strength = 0.5;
        assert_eq!(apply_state(&mut sink, &state), 2);
        assert_eq!(sink.get("wind_direction"), Some(&270.0));
    }
}

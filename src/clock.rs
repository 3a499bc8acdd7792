//! Wall-clock fields for simulator time sync

use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// UTC date and time split into the fields a simulator expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Zero-based day of year, as X-Plane counts it
    pub day_of_year: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl SimTime {
    #[must_use]
    pub fn from_utc(time: DateTime<Utc>) -> Self {
        Self {
            year: time.year(),
            month: time.month(),
            day: time.day(),
            day_of_year: time.ordinal0(),
            hour: time.hour(),
            minute: time.minute(),
            second: time.second(),
        }
    }

    #[must_use]
    pub fn now() -> Self {
        Self::from_utc(Utc::now())
    }

    /// Seconds since UTC midnight
    #[must_use]
    pub fn seconds_of_day(&self) -> u32 {
        self.hour * 3600 + self.minute * 60 + self.second
    }
}

/// Current UTC month (1-12), used for the seasonal correction
#[must_use]
pub fn current_month() -> u32 {
    Utc::now().month()
}

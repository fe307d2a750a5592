use chrono::{DateTime, Duration, SecondsFormat, Utc};

use crate::config::{DAYS_BACK, DAYS_FORWARD};


/// The span both fetchers ask for, anchored on a single `now`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    pub fn around(now: DateTime<Utc>, days_back: i64, days_forward: i64) -> Self {
        Self {
            start: now - Duration::days(days_back),
            end: now + Duration::days(days_forward),
        }
    }

    pub fn default_at(now: DateTime<Utc>) -> Self {
        Self::around(now, DAYS_BACK, DAYS_FORWARD)
    }

    // 2024-10-01T12:30:15.123456Z, or 2024-10-01T12:30:15Z on a whole second
    pub fn octopus_bounds(&self) -> (String, String) {
        (iso_utc(self.start), iso_utc(self.end))
    }

    // 2024-10-01T12:30Z
    pub fn carbon_bounds(&self) -> (String, String) {
        (
            self.start.format("%Y-%m-%dT%H:%MZ").to_string(),
            self.end.format("%Y-%m-%dT%H:%MZ").to_string(),
        )
    }
}

fn iso_utc(at: DateTime<Utc>) -> String {
    let precision = if at.timestamp_subsec_micros() == 0 {
        SecondsFormat::Secs
    } else {
        SecondsFormat::Micros
    };
    at.to_rfc3339_opts(precision, true)
}

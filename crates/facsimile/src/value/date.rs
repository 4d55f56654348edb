//! Date values

use chrono::{DateTime, SecondsFormat, Utc};

/// Largest representable distance from the epoch, in milliseconds.
const MAX_TIME_MS: f64 = 8.64e15;

/// A date, stored as milliseconds since the Unix epoch.
///
/// A NaN timestamp is an invalid date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateBox {
    epoch_ms: f64,
}

impl DateBox {
    /// Create a date from an epoch timestamp.
    ///
    /// Non-finite or out-of-range timestamps produce an invalid date;
    /// fractional milliseconds are truncated.
    pub fn from_epoch_millis(ms: f64) -> Self {
        Self {
            epoch_ms: time_clip(ms),
        }
    }

    /// Create a date from a chrono timestamp
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self::from_epoch_millis(dt.timestamp_millis() as f64)
    }

    /// The current time
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// An invalid date
    pub fn invalid() -> Self {
        Self { epoch_ms: f64::NAN }
    }

    /// Milliseconds since the epoch (NaN for an invalid date)
    pub fn epoch_millis(&self) -> f64 {
        self.epoch_ms
    }

    /// Whether the date holds a real timestamp
    pub fn is_valid(&self) -> bool {
        !self.epoch_ms.is_nan()
    }

    /// Set the timestamp, returning the clipped value stored
    pub fn set_time(&mut self, ms: f64) -> f64 {
        self.epoch_ms = time_clip(ms);
        self.epoch_ms
    }

    /// Convert to a chrono timestamp
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        if !self.is_valid() {
            return None;
        }
        DateTime::from_timestamp_millis(self.epoch_ms as i64)
    }

    /// ISO-8601 rendering with millisecond precision, e.g. `2024-01-02T03:04:05.006Z`
    pub fn to_iso_string(&self) -> Option<String> {
        self.to_datetime()
            .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

fn time_clip(ms: f64) -> f64 {
    if !ms.is_finite() || ms.abs() > MAX_TIME_MS {
        return f64::NAN;
    }
    // +0 for -0
    ms.trunc() + 0.0
}

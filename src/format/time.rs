//! UTC rendering of epoch-second timestamps.

use chrono::{DateTime, Utc};
use serde_json::Value;

/// Rendered in place of a timestamp that cannot be interpreted.
pub const TIMESTAMP_FALLBACK: &str = "N/A";

const DATETIME_PATTERN: &str = "%Y-%m-%d %H:%M:%S";
const DATE_PATTERN: &str = "%Y-%m-%d";

/// Something that may hold a whole number of seconds since the UNIX epoch.
///
/// Implemented for the shapes the scan API uses for timestamps: integers,
/// numeric strings and JSON values. `None` means "not a usable timestamp".
pub trait EpochSeconds {
    fn epoch_seconds(&self) -> Option<i64>;
}

macro_rules! epoch_seconds_int {
    ($($t:ty),*) => {
        $(impl EpochSeconds for $t {
            fn epoch_seconds(&self) -> Option<i64> {
                i64::try_from(*self).ok()
            }
        })*
    };
}

epoch_seconds_int!(i32, i64, u32, u64, usize);

impl EpochSeconds for f64 {
    fn epoch_seconds(&self) -> Option<i64> {
        if !self.is_finite() || self.fract() != 0.0 {
            return None;
        }
        if *self < i64::MIN as f64 || *self > i64::MAX as f64 {
            return None;
        }
        Some(*self as i64)
    }
}

impl EpochSeconds for str {
    fn epoch_seconds(&self) -> Option<i64> {
        self.trim().parse::<i64>().ok()
    }
}

impl EpochSeconds for String {
    fn epoch_seconds(&self) -> Option<i64> {
        self.as_str().epoch_seconds()
    }
}

impl EpochSeconds for Value {
    fn epoch_seconds(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().and_then(|f| f.epoch_seconds())),
            Value::String(s) => s.epoch_seconds(),
            _ => None,
        }
    }
}

impl<T: EpochSeconds + ?Sized> EpochSeconds for &T {
    fn epoch_seconds(&self) -> Option<i64> {
        (**self).epoch_seconds()
    }
}

impl<T: EpochSeconds> EpochSeconds for Option<T> {
    fn epoch_seconds(&self) -> Option<i64> {
        self.as_ref().and_then(|v| v.epoch_seconds())
    }
}

fn to_datetime<T: EpochSeconds + ?Sized>(value: &T) -> Option<DateTime<Utc>> {
    value
        .epoch_seconds()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
}

/// Render a timestamp as `YYYY-MM-DD HH:MM:SS` in UTC.
///
/// Anything that is not a whole number of seconds inside chrono's calendar
/// range yields [`TIMESTAMP_FALLBACK`].
///
/// ```rust
/// use confluxscan_sdk::format::format_timestamp;
/// assert_eq!(format_timestamp(&1677649200u64), "2023-03-01 05:40:00");
/// assert_eq!(format_timestamp("garbage"), "N/A");
/// ```
pub fn format_timestamp<T: EpochSeconds + ?Sized>(value: &T) -> String {
    match to_datetime(value) {
        Some(dt) => dt.format(DATETIME_PATTERN).to_string(),
        None => TIMESTAMP_FALLBACK.to_string(),
    }
}

/// Render a timestamp as `YYYY-MM-DD` in UTC.
pub fn format_date<T: EpochSeconds + ?Sized>(value: &T) -> String {
    match to_datetime(value) {
        Some(dt) => dt.format(DATE_PATTERN).to_string(),
        None => TIMESTAMP_FALLBACK.to_string(),
    }
}

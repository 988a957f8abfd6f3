//! Time-related utilities with clock abstraction for testability.

use chrono::{DateTime, FixedOffset, Local, Offset, Utc};

/// Clock trait for dependency injection and testing
pub trait Clock: Send + Sync {
    /// Get current Unix timestamp (milliseconds)
    fn now_millis(&self) -> i64;
}

/// System clock implementation (uses actual system time)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Fixed clock implementation for testing (returns a fixed time)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    fixed_time: i64,
}

impl FixedClock {
    /// Create a new fixed clock with the given timestamp
    pub fn new(fixed_time_millis: i64) -> Self {
        Self {
            fixed_time: fixed_time_millis,
        }
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.fixed_time
    }
}

/// UTC offset of the machine's local time zone, right now.
pub fn local_offset() -> FixedOffset {
    Local::now().offset().fix()
}

fn to_offset_datetime(timestamp_millis: i64, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    DateTime::from_timestamp_millis(timestamp_millis).map(|utc| utc.with_timezone(&offset))
}

/// Convert Unix timestamp (milliseconds) to RFC 3339 in the given offset.
///
/// Timestamps outside chrono's range render as an empty string.
pub fn timestamp_to_rfc3339(timestamp_millis: i64, offset: FixedOffset) -> String {
    to_offset_datetime(timestamp_millis, offset)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_default()
}

/// Convert Unix timestamp (milliseconds) to a `HH:MM` wall-clock time.
pub fn timestamp_to_clock_time(timestamp_millis: i64, offset: FixedOffset) -> String {
    to_offset_datetime(timestamp_millis, offset)
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

//! DateTime display utilities.
//!
//! This module provides a wrapper type for formatting timestamps in a
//! consistent, human-readable format in a given time zone.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// A wrapper around `Timestamp` that formats it in a time zone via the
/// `Display` trait.
///
/// # Format
///
/// The display format follows the pattern: `YYYY-MM-DD HH:MM:SS TZ`
/// - Year, month, and day are zero-padded
/// - Time is in 24-hour format with zero-padded components
/// - Timezone abbreviation is included (e.g., UTC, EST, JST)
pub struct LocalDateTime<'a> {
    timestamp: &'a Timestamp,
    time_zone: &'a TimeZone,
}

impl<'a> LocalDateTime<'a> {
    pub fn new(timestamp: &'a Timestamp, time_zone: &'a TimeZone) -> Self {
        Self {
            timestamp,
            time_zone,
        }
    }
}

impl<'a> fmt::Display for LocalDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.timestamp
                .to_zoned(self.time_zone.clone())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

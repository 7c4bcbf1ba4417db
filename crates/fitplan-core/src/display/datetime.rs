//! Date and clock display utilities.
//!
//! This module provides wrapper types for formatting timestamps and time
//! ranges in a consistent, human-readable format.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

use crate::clock::ClockTime;

/// A wrapper around `Timestamp` that formats it in the system timezone.
///
/// # Format
///
/// The display format follows the pattern: `YYYY-MM-DD HH:MM:SS TZ`
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// A start/end pair rendered as "6:00 AM – 6:20 AM".
///
/// Both ends wrap past midnight independently.
pub struct ClockRange(pub ClockTime, pub ClockTime);

impl fmt::Display for ClockRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} – {}", self.0, self.1)
    }
}

//! Minutes-since-midnight clock values.
//!
//! A [`ClockTime`] keeps the raw minute count it was built from. Parsing never
//! clamps, so "25:00" is 1500 minutes and arithmetic may run past midnight.
//! Formatting folds the value back into a single day, which is what lets a
//! sleep block starting at 10 PM end at "6:00 AM".
//!
//! On the wire a clock time is its 12-hour label, so serialized schedules
//! never carry minute counts outside one day.
//!
//! ```rust
//! use fitplan_core::clock::{format_clock_time, parse_clock_time};
//!
//! let wake = parse_clock_time("07:30").unwrap();
//! assert_eq!(wake.minutes(), 450);
//! assert_eq!(wake.to_string(), "7:30 AM");
//! assert_eq!(format_clock_time(1450), "12:10 AM");
//! ```

use std::{fmt, str::FromStr};

use jiff::civil;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{FitplanError, Result};

/// Number of minutes in one day.
pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// A time of day expressed as minutes since midnight.
///
/// Serializes as its label ("10:00 PM") and deserializes from the same form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(i32);

impl ClockTime {
    /// Wraps a raw minute count without normalizing it.
    pub const fn from_minutes(minutes: i32) -> Self {
        Self(minutes)
    }

    /// Raw minute count, possibly outside `0..1440`.
    pub const fn minutes(self) -> i32 {
        self.0
    }

    /// Minute count folded into `0..1440`.
    pub const fn normalized(self) -> i32 {
        self.0.rem_euclid(MINUTES_PER_DAY)
    }

    /// The same time of day with the minute count folded into `0..1440`.
    pub const fn wrapped(self) -> Self {
        Self(self.normalized())
    }

    /// Shifts the time by `minutes`, saturating at the `i32` bounds.
    pub const fn add_minutes(self, minutes: i32) -> Self {
        Self(self.0.saturating_add(minutes))
    }

    /// Signed number of minutes from `self` to `later`.
    pub const fn minutes_until(self, later: ClockTime) -> i32 {
        later.0.saturating_sub(self.0)
    }

    /// 12-hour label such as "7:30 AM".
    pub fn label(self) -> String {
        format_clock_time(self.0)
    }
}

/// Parses "HH:MM" text into a [`ClockTime`].
///
/// Whitespace around either component is ignored. Hours and minutes are not
/// range-checked.
///
/// # Errors
///
/// Returns [`FitplanError::ClockParse`] when the ':' separator is missing,
/// either component is not an integer, or the minute count overflows.
pub fn parse_clock_time(text: &str) -> Result<ClockTime> {
    let (hour, minute) = text
        .split_once(':')
        .ok_or_else(|| FitplanError::clock_parse(text).with_reason("missing ':' separator"))?;

    let hour: i32 = hour.trim().parse().map_err(|_| {
        FitplanError::clock_parse(text).with_reason(format!("hour '{hour}' is not an integer"))
    })?;
    let minute: i32 = minute.trim().parse().map_err(|_| {
        FitplanError::clock_parse(text).with_reason(format!("minute '{minute}' is not an integer"))
    })?;

    hour.checked_mul(60)
        .and_then(|h| h.checked_add(minute))
        .map(ClockTime)
        .ok_or_else(|| FitplanError::clock_parse(text).with_reason("minute count overflows"))
}

/// Formats a minute count as a 12-hour clock label.
///
/// The value wraps modulo one day, so `format_clock_time(m)` equals
/// `format_clock_time(m + 1440 * k)` for every `k`. A single leading zero is
/// dropped from the hour.
pub fn format_clock_time(minutes: i32) -> String {
    let wrapped = minutes.rem_euclid(MINUTES_PER_DAY);
    // Both components are in range after the fold.
    let time = civil::time((wrapped / 60) as i8, (wrapped % 60) as i8, 0, 0);
    let label = time.strftime("%I:%M %p").to_string();
    match label.strip_prefix('0') {
        Some(rest) => rest.to_string(),
        None => label,
    }
}

/// Parses a 12-hour label such as "6:00 AM" back into a [`ClockTime`].
///
/// The result is always within `0..1440`.
///
/// # Errors
///
/// Returns [`FitplanError::ClockParse`] when the text is not an "h:mm AM/PM"
/// label.
pub fn parse_clock_label(text: &str) -> Result<ClockTime> {
    let label = text.trim();
    // strptime's %I wants two hour digits.
    let padded = match label.find(':') {
        Some(1) => format!("0{label}"),
        _ => label.to_string(),
    };
    let time = civil::Time::strptime("%I:%M %p", &padded).map_err(|e| {
        FitplanError::clock_parse(text).with_reason(format!("not a 12-hour label: {e}"))
    })?;
    Ok(ClockTime(i32::from(time.hour()) * 60 + i32::from(time.minute())))
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        parse_clock_label(&label).map_err(de::Error::custom)
    }
}

impl FromStr for ClockTime {
    type Err = FitplanError;

    fn from_str(s: &str) -> Result<Self> {
        parse_clock_time(s)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

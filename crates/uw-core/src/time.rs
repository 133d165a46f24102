use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// A clock reading as integer hour/minute/second fields.
///
/// Values are not range-checked: in manual mode the host may set anything,
/// and out-of-range or negative fields are only ever sign-normalized and
/// wrapped for display, never rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDay {
    /// Hour field (wrapped modulo 24 for display).
    pub hours: i32,
    /// Minute field (wrapped modulo 60 for display).
    pub minutes: i32,
    /// Second field (wrapped modulo 60 for display).
    pub seconds: i32,
}

impl TimeOfDay {
    /// Create a time-of-day from raw integer fields.
    pub fn new(hours: i32, minutes: i32, seconds: i32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Sample the integer fields of a wall-clock time.
    pub fn from_wall_clock(now: NaiveTime) -> Self {
        Self {
            hours: now.hour() as i32,
            minutes: now.minute() as i32,
            seconds: now.second() as i32,
        }
    }

    /// Format as a digital `HH:MM:SS` label.
    ///
    /// Each field is sign-normalized, wrapped to its natural period
    /// (24 for hours, 60 for minutes and seconds), and zero-padded to
    /// two digits, so the result is always exactly 8 characters.
    pub fn digital(&self) -> String {
        format!(
            "{}:{}:{}",
            two_digit(self.hours, 24),
            two_digit(self.minutes, 60),
            two_digit(self.seconds, 60)
        )
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.digital())
    }
}

fn two_digit(value: i32, period: i32) -> String {
    format!("{:02}", value.abs() % period)
}

/// Fractional time elapsed since midnight.
///
/// Where [`TimeOfDay`] snaps to whole units, a `DaySpan` carries the
/// sub-second remainder, so hands driven from it sweep smoothly instead
/// of jumping once per unit.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DaySpan {
    seconds: f64,
}

impl DaySpan {
    /// Create a span from raw seconds since midnight.
    pub fn from_seconds(seconds: f64) -> Self {
        Self { seconds }
    }

    /// Measure the span since midnight of a wall-clock time, including
    /// the sub-second fraction.
    pub fn from_wall_clock(now: NaiveTime) -> Self {
        let seconds = f64::from(now.num_seconds_from_midnight())
            + f64::from(now.nanosecond()) / 1_000_000_000.0;
        Self { seconds }
    }

    /// Total elapsed hours as a real number.
    pub fn total_hours(&self) -> f64 {
        self.seconds / 3600.0
    }

    /// Total elapsed minutes as a real number.
    pub fn total_minutes(&self) -> f64 {
        self.seconds / 60.0
    }

    /// Total elapsed seconds as a real number.
    pub fn total_seconds(&self) -> f64 {
        self.seconds
    }
}

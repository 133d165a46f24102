use serde::{Deserialize, Serialize};

use crate::time::{DaySpan, TimeOfDay};

/// Degrees the hour hand turns per hour (one of 12 turns around the dial).
pub const DEGREES_PER_HOUR: f32 = 30.0;
/// Degrees the minute hand turns per minute (one of 60 turns).
pub const DEGREES_PER_MINUTE: f32 = 6.0;
/// Degrees the second hand turns per second (one of 60 turns, the same
/// angular rate as the minute hand).
pub const DEGREES_PER_SECOND: f32 = 6.0;

/// Wrap an angle into `[0, 360)` degrees.
pub fn normalize_degrees(degrees: f32) -> f32 {
    degrees.rem_euclid(360.0)
}

/// Rotation angles for the three clock hands, in degrees around the
/// shared dial axis.
///
/// Angles are raw (not wrapped); hosts applying them to a rotation are
/// expected to handle full turns, and [`HandAngles::normalized`] wraps
/// them when a canonical value is needed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HandAngles {
    /// Hour hand angle in degrees.
    pub hour: f32,
    /// Minute hand angle in degrees.
    pub minute: f32,
    /// Second hand angle in degrees.
    pub second: f32,
}

impl HandAngles {
    /// Hand angles for whole-unit fields: each hand snaps to its unit
    /// boundary. Used by the manual and discrete time sources.
    pub fn discrete(time: &TimeOfDay) -> Self {
        Self {
            hour: time.hours as f32 * DEGREES_PER_HOUR,
            minute: time.minutes as f32 * DEGREES_PER_MINUTE,
            second: time.seconds as f32 * DEGREES_PER_SECOND,
        }
    }

    /// Hand angles for a fractional span since midnight: each hand sweeps
    /// smoothly between unit boundaries. Used by the continuous source.
    pub fn continuous(span: &DaySpan) -> Self {
        Self {
            hour: span.total_hours() as f32 * DEGREES_PER_HOUR,
            minute: span.total_minutes() as f32 * DEGREES_PER_MINUTE,
            second: span.total_seconds() as f32 * DEGREES_PER_SECOND,
        }
    }

    /// The same angles wrapped into `[0, 360)`.
    pub fn normalized(&self) -> Self {
        Self {
            hour: normalize_degrees(self.hour),
            minute: normalize_degrees(self.minute),
            second: normalize_degrees(self.second),
        }
    }
}

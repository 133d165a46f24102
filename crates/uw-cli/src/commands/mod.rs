pub mod show;
pub mod simulate;
pub mod watch;

use std::fmt;

use chrono::NaiveTime;
use clap::ValueEnum;

use uw_simulation::TimeMode;

/// Time-source selector exposed on the command line. One of three
/// mutually exclusive states; maps directly onto [`TimeMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Clock fields are fixed to the configured time.
    Manual,
    /// Hands sweep smoothly with the fractional time of day.
    Continuous,
    /// Hands snap to whole units sampled each frame.
    Discrete,
}

impl From<ModeArg> for TimeMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Manual => Self::Manual,
            ModeArg::Continuous => Self::Continuous,
            ModeArg::Discrete => Self::Discrete,
        }
    }
}

impl fmt::Display for ModeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", TimeMode::from(*self))
    }
}

/// Parse an `HH:MM:SS` command-line argument.
pub fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M:%S").map_err(|e| format!("invalid time '{s}': {e}"))
}

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ClockError, ClockResult};

/// The time-source policy deciding where clock readings come from.
///
/// Exactly one policy is active at a time. The variants replace a legacy
/// pair of overlapping booleans; see [`TimeMode::from_flags`] for the
/// mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeMode {
    /// Clock fields are set externally and never overwritten.
    Manual,
    /// Hands sweep smoothly, driven by the fractional time since midnight.
    Continuous,
    /// Hands snap to whole units sampled from the wall clock each frame.
    #[default]
    Discrete,
}

impl TimeMode {
    /// Map the legacy `manual`/`continuous` boolean pair onto a mode.
    ///
    /// Neither flag set means [`TimeMode::Discrete`]. Setting both is
    /// rejected: the combination was unreachable in the original
    /// configuration surface and has no defined meaning.
    pub fn from_flags(manual: bool, continuous: bool) -> ClockResult<Self> {
        match (manual, continuous) {
            (true, true) => Err(ClockError::ConflictingModes),
            (true, false) => Ok(Self::Manual),
            (false, true) => Ok(Self::Continuous),
            (false, false) => Ok(Self::Discrete),
        }
    }

    /// Whether clock fields are host-authoritative rather than sampled.
    pub fn is_manual(self) -> bool {
        matches!(self, Self::Manual)
    }
}

impl fmt::Display for TimeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Manual => "manual",
            Self::Continuous => "continuous",
            Self::Discrete => "discrete",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_to_modes() {
        assert_eq!(TimeMode::from_flags(true, false).unwrap(), TimeMode::Manual);
        assert_eq!(
            TimeMode::from_flags(false, true).unwrap(),
            TimeMode::Continuous
        );
        assert_eq!(
            TimeMode::from_flags(false, false).unwrap(),
            TimeMode::Discrete
        );
    }

    #[test]
    fn both_flags_rejected() {
        assert!(matches!(
            TimeMode::from_flags(true, true),
            Err(ClockError::ConflictingModes)
        ));
    }

    #[test]
    fn default_is_discrete() {
        assert_eq!(TimeMode::default(), TimeMode::Discrete);
    }

    #[test]
    fn display_names() {
        assert_eq!(TimeMode::Manual.to_string(), "manual");
        assert_eq!(TimeMode::Continuous.to_string(), "continuous");
        assert_eq!(TimeMode::Discrete.to_string(), "discrete");
    }
}

use uw_core::assets::PresetPair;
use uw_core::time::TimeOfDay;

use crate::mode::TimeMode;

/// Configuration for a clock simulation.
#[derive(Debug, Clone)]
pub struct ClockConfig {
    /// The time-source policy to start with.
    pub mode: TimeMode,
    /// Initial clock fields. Authoritative only in manual mode; other
    /// modes overwrite them on the first tick.
    pub initial_time: TimeOfDay,
    /// Multiplier on how fast the rendered sun settles toward its
    /// target angle.
    pub sun_rotation_speed: f32,
    /// Initial lighting state (`true` = day preset). The startup check
    /// corrects this once if it disagrees with the computed sun angle.
    pub lights_on: bool,
    /// The day/night material/activation sets to switch between.
    pub presets: PresetPair,
    /// Maximum event log size (oldest events dropped when exceeded).
    /// 0 = unlimited.
    pub max_events: usize,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            mode: TimeMode::Discrete,
            initial_time: TimeOfDay::default(),
            sun_rotation_speed: 1.0,
            lights_on: true,
            presets: PresetPair::default(),
            max_events: 0,
        }
    }
}

impl ClockConfig {
    /// Set the time-source policy.
    pub fn with_mode(mut self, mode: TimeMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the initial clock fields (used as-is in manual mode).
    pub fn with_initial_time(mut self, time: TimeOfDay) -> Self {
        self.initial_time = time;
        self
    }

    /// Set the sun smoothing-rate multiplier.
    pub fn with_sun_rotation_speed(mut self, speed: f32) -> Self {
        self.sun_rotation_speed = speed;
        self
    }

    /// Set the initial lighting state.
    pub fn with_lights_on(mut self, lights_on: bool) -> Self {
        self.lights_on = lights_on;
        self
    }

    /// Set the day/night preset pair.
    pub fn with_presets(mut self, presets: PresetPair) -> Self {
        self.presets = presets;
        self
    }

    /// Set the maximum event log size (0 = unlimited).
    pub fn with_max_events(mut self, max: usize) -> Self {
        self.max_events = max;
        self
    }
}

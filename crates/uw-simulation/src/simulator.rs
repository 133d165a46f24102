use chrono::NaiveTime;
use glam::Quat;
use serde::Serialize;

use uw_core::angle::HandAngles;
use uw_core::assets::LightingPreset;
use uw_core::time::{DaySpan, TimeOfDay};

use crate::config::ClockConfig;
use crate::event::{ClockEvent, ClockEventKind, EventLog};
use crate::lighting::LightingState;
use crate::mode::TimeMode;
use crate::sun::{SunState, is_night_angle, sun_angle_degrees};

/// Per-frame inputs handed in by the host loop.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    /// The host's current wall-clock time.
    pub now: NaiveTime,
    /// Seconds elapsed since the previous frame.
    pub delta_seconds: f32,
    /// Whether the user requested a lighting toggle this frame.
    pub toggle_lights: bool,
}

impl Frame {
    /// A frame with no toggle request.
    pub fn new(now: NaiveTime, delta_seconds: f32) -> Self {
        Self {
            now,
            delta_seconds,
            toggle_lights: false,
        }
    }

    /// Mark this frame as carrying a lighting-toggle request.
    pub fn with_toggle(mut self) -> Self {
        self.toggle_lights = true;
        self
    }
}

/// A copyable view of everything the simulator derives, for display or
/// export.
#[derive(Debug, Clone, Serialize)]
pub struct ClockSnapshot {
    /// The active time-source policy.
    pub mode: TimeMode,
    /// The digital `HH:MM:SS` label.
    pub digital_time: String,
    /// The integer clock fields behind the label.
    pub time: TimeOfDay,
    /// Current hand angles in degrees.
    pub hands: HandAngles,
    /// The sun's target elevation in whole degrees.
    pub sun_angle_degrees: i32,
    /// The smoothed sun orientation a renderer would apply.
    pub sun_orientation: Quat,
    /// Current lighting state (`true` = day preset).
    pub lights_on: bool,
    /// The material/activation set currently applied.
    pub preset: LightingPreset,
}

/// The day/night clock simulation.
///
/// Owns the clock fields, the virtual sun, the lighting state, and the
/// event log. The host calls [`ClockSimulator::tick`] exactly once per
/// rendered frame; everything else is read access.
#[derive(Debug)]
pub struct ClockSimulator {
    mode: TimeMode,
    time: TimeOfDay,
    digital: String,
    hands: HandAngles,
    sun: SunState,
    lighting: LightingState,
    events: EventLog,
    frames: u64,
    startup_checked: bool,
}

impl ClockSimulator {
    /// Create a simulator from a configuration.
    pub fn new(config: ClockConfig) -> Self {
        let initial_angle =
            sun_angle_degrees(config.initial_time.hours, config.initial_time.minutes);
        Self {
            mode: config.mode,
            time: config.initial_time,
            digital: config.initial_time.digital(),
            hands: HandAngles::discrete(&config.initial_time),
            sun: SunState::new(config.sun_rotation_speed, initial_angle),
            lighting: LightingState::new(config.presets, config.lights_on),
            events: EventLog::new(config.max_events),
            frames: 0,
            startup_checked: false,
        }
    }

    /// Advance the simulation by one frame.
    ///
    /// Steps run in a fixed order: sample the time source, re-render the
    /// digital label, set hand angles, advance the sun one smoothing
    /// step, honor a toggle request, and (once, on the first frame) run
    /// the startup lighting alignment after the sun update has settled
    /// the target angle.
    pub fn tick(&mut self, frame: Frame) {
        self.frames += 1;

        // 1. Acquire time. Manual fields are host-authoritative.
        if !self.mode.is_manual() {
            self.time = TimeOfDay::from_wall_clock(frame.now);
        }

        // 2. Digital label always comes from the integer fields.
        self.digital = self.time.digital();

        // 3. Hand orientations per the active source.
        self.hands = match self.mode {
            TimeMode::Manual | TimeMode::Discrete => HandAngles::discrete(&self.time),
            TimeMode::Continuous => {
                HandAngles::continuous(&DaySpan::from_wall_clock(frame.now))
            }
        };

        // 4. Sun target from hours/minutes, then one smoothing step.
        let angle = sun_angle_degrees(self.time.hours, self.time.minutes);
        self.sun.advance(angle, frame.delta_seconds);

        // 5. Host-requested lighting toggle.
        if frame.toggle_lights {
            self.toggle_lighting();
        }

        // 6. One-shot startup alignment, after the first sun update.
        if !self.startup_checked {
            self.startup_checked = true;
            let night = is_night_angle(angle);
            if self.lighting.align_to_night(night) {
                let sky = if night { "night" } else { "day" };
                self.emit(
                    ClockEventKind::StartupAligned { night },
                    format!("startup alignment: {sky} sky at {angle} degrees"),
                );
            }
        }
    }

    /// Flip the lighting state and return the preset the host must now
    /// apply. Equivalent to a tick with `toggle_lights` set.
    pub fn toggle_lighting(&mut self) -> &LightingPreset {
        self.lighting.toggle();
        let on = self.lighting.lights_on();
        let label = if on { "on (day preset)" } else { "off (night preset)" };
        self.emit(
            ClockEventKind::LightsToggled { on },
            format!("lights toggled {label}"),
        );
        self.lighting.active_preset()
    }

    /// Switch the time-source policy. Takes effect from the next tick;
    /// already-derived angles are left untouched.
    pub fn set_mode(&mut self, mode: TimeMode) {
        if mode == self.mode {
            return;
        }
        let from = self.mode;
        self.mode = mode;
        self.emit(
            ClockEventKind::ModeChanged { from, to: mode },
            format!("time source: {from} -> {mode}"),
        );
    }

    /// Overwrite the clock fields. Authoritative in manual mode; other
    /// modes resample on the next tick.
    pub fn set_manual_time(&mut self, time: TimeOfDay) {
        self.time = time;
    }

    /// The active time-source policy.
    pub fn mode(&self) -> TimeMode {
        self.mode
    }

    /// The current integer clock fields.
    pub fn time(&self) -> TimeOfDay {
        self.time
    }

    /// The digital `HH:MM:SS` label as of the last tick.
    pub fn digital_time(&self) -> &str {
        &self.digital
    }

    /// Current hand angles in degrees.
    pub fn hand_angles(&self) -> HandAngles {
        self.hands
    }

    /// The sun's target elevation in whole degrees.
    pub fn sun_angle(&self) -> i32 {
        self.sun.target_angle()
    }

    /// The smoothed sun orientation as of the last tick.
    pub fn sun_orientation(&self) -> Quat {
        self.sun.rendered()
    }

    /// Current lighting state (`true` = day preset).
    pub fn lights_on(&self) -> bool {
        self.lighting.lights_on()
    }

    /// The material/activation set currently applied.
    pub fn active_preset(&self) -> &LightingPreset {
        self.lighting.active_preset()
    }

    /// The simulation event log.
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Number of frames ticked so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Collect the derived state into a snapshot.
    pub fn snapshot(&self) -> ClockSnapshot {
        ClockSnapshot {
            mode: self.mode,
            digital_time: self.digital.clone(),
            time: self.time,
            hands: self.hands,
            sun_angle_degrees: self.sun.target_angle(),
            sun_orientation: self.sun.rendered(),
            lights_on: self.lighting.lights_on(),
            preset: *self.lighting.active_preset(),
        }
    }

    fn emit(&mut self, kind: ClockEventKind, description: impl Into<String>) {
        self.events
            .push(ClockEvent::new(self.frames, kind, description));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uw_core::assets::PresetPair;

    fn noon() -> NaiveTime {
        NaiveTime::from_hms_opt(12, 0, 0).unwrap()
    }

    fn manual_sim(h: i32, m: i32, s: i32) -> ClockSimulator {
        ClockSimulator::new(
            ClockConfig::default()
                .with_mode(TimeMode::Manual)
                .with_initial_time(TimeOfDay::new(h, m, s)),
        )
    }

    #[test]
    fn manual_mode_ignores_wall_clock() {
        let mut sim = manual_sim(3, 7, 0);
        sim.tick(Frame::new(noon(), 0.016));
        assert_eq!(sim.digital_time(), "03:07:00");
        assert_eq!(sim.hand_angles().hour, 90.0);
        assert_eq!(sim.hand_angles().minute, 42.0);
        assert_eq!(sim.hand_angles().second, 0.0);
    }

    #[test]
    fn discrete_mode_samples_wall_clock() {
        let mut sim = ClockSimulator::new(ClockConfig::default());
        let now = NaiveTime::from_hms_opt(6, 30, 15).unwrap();
        sim.tick(Frame::new(now, 0.016));
        assert_eq!(sim.digital_time(), "06:30:15");
        assert_eq!(sim.time(), TimeOfDay::new(6, 30, 15));
        assert_eq!(sim.hand_angles().hour, 180.0);
        assert_eq!(sim.hand_angles().minute, 180.0);
        assert_eq!(sim.hand_angles().second, 90.0);
    }

    #[test]
    fn continuous_mode_sweeps_between_units() {
        let mut sim =
            ClockSimulator::new(ClockConfig::default().with_mode(TimeMode::Continuous));
        let now = NaiveTime::from_hms_milli_opt(12, 0, 30, 500).unwrap();
        sim.tick(Frame::new(now, 0.016));

        let span = DaySpan::from_wall_clock(now);
        let expected = HandAngles::continuous(&span);
        assert!((sim.hand_angles().second - expected.second).abs() < 1e-3);
        // The label still snaps to whole seconds
        assert_eq!(sim.digital_time(), "12:00:30");
    }

    #[test]
    fn sun_angle_follows_hours_and_minutes() {
        let mut sim = manual_sim(20, 40, 0);
        sim.tick(Frame::new(noon(), 0.016));
        assert_eq!(sim.sun_angle(), 200);
    }

    #[test]
    fn startup_aligns_night_sky() {
        // 20:40 -> angle 200, outside the day band
        let mut sim = manual_sim(20, 40, 0);
        assert!(sim.lights_on());
        sim.tick(Frame::new(noon(), 0.016));
        assert!(!sim.lights_on());
        assert!(matches!(
            sim.events().events()[0].kind,
            ClockEventKind::StartupAligned { night: true }
        ));
    }

    #[test]
    fn startup_keeps_day_sky() {
        // 07:20 -> angle 0, inside the day band
        let mut sim = manual_sim(7, 20, 0);
        sim.tick(Frame::new(noon(), 0.016));
        assert!(sim.lights_on());
        assert!(sim.events().is_empty());
    }

    #[test]
    fn startup_corrects_a_night_configuration_in_daytime() {
        let mut sim = ClockSimulator::new(
            ClockConfig::default()
                .with_mode(TimeMode::Manual)
                .with_initial_time(TimeOfDay::new(7, 20, 0))
                .with_lights_on(false),
        );
        sim.tick(Frame::new(noon(), 0.016));
        assert!(sim.lights_on());
    }

    #[test]
    fn startup_check_runs_exactly_once() {
        let mut sim = manual_sim(20, 40, 0);
        for _ in 0..5 {
            sim.tick(Frame::new(noon(), 0.016));
        }
        let aligned = sim
            .events()
            .events()
            .iter()
            .filter(|e| matches!(e.kind, ClockEventKind::StartupAligned { .. }))
            .count();
        assert_eq!(aligned, 1);
    }

    #[test]
    fn lighting_never_resyncs_as_time_passes() {
        let mut sim = ClockSimulator::new(ClockConfig::default());
        sim.tick(Frame::new(noon(), 0.016));
        assert!(sim.lights_on());

        // Cross into the night band; the flag must not move on its own
        let late = NaiveTime::from_hms_opt(23, 0, 0).unwrap();
        for _ in 0..10 {
            sim.tick(Frame::new(late, 0.016));
        }
        assert!(sim.lights_on());
    }

    #[test]
    fn toggle_request_flips_and_logs() {
        let mut sim = ClockSimulator::new(ClockConfig::default());
        sim.tick(Frame::new(noon(), 0.016));
        let initial = *sim.active_preset();

        sim.tick(Frame::new(noon(), 0.016).with_toggle());
        assert!(!sim.lights_on());
        assert_eq!(sim.active_preset(), &PresetPair::default().night);

        sim.tick(Frame::new(noon(), 0.016).with_toggle());
        assert!(sim.lights_on());
        assert_eq!(sim.active_preset(), &initial);

        let toggles = sim
            .events()
            .events()
            .iter()
            .filter(|e| matches!(e.kind, ClockEventKind::LightsToggled { .. }))
            .count();
        assert_eq!(toggles, 2);
    }

    #[test]
    fn mode_switch_applies_to_future_ticks_only() {
        let mut sim = manual_sim(3, 0, 0);
        let now = NaiveTime::from_hms_opt(6, 30, 0).unwrap();
        sim.tick(Frame::new(now, 0.016));
        assert_eq!(sim.hand_angles().hour, 90.0);

        sim.set_mode(TimeMode::Discrete);
        // Nothing rendered changes until the next tick
        assert_eq!(sim.hand_angles().hour, 90.0);
        assert_eq!(sim.digital_time(), "03:00:00");

        sim.tick(Frame::new(now, 0.016));
        assert_eq!(sim.hand_angles().hour, 180.0);
        assert_eq!(sim.digital_time(), "06:30:00");

        assert!(
            sim.events()
                .events()
                .iter()
                .any(|e| matches!(e.kind, ClockEventKind::ModeChanged { .. }))
        );
    }

    #[test]
    fn manual_time_takes_over_after_a_mode_switch() {
        let mut sim = ClockSimulator::new(ClockConfig::default());
        let now = NaiveTime::from_hms_opt(6, 30, 0).unwrap();
        sim.tick(Frame::new(now, 0.016));
        assert_eq!(sim.digital_time(), "06:30:00");

        sim.set_mode(TimeMode::Manual);
        sim.set_manual_time(TimeOfDay::new(21, 15, 40));
        sim.tick(Frame::new(now, 0.016));
        assert_eq!(sim.digital_time(), "21:15:40");
        assert_eq!(sim.hand_angles().hour, 630.0);
        assert_eq!(sim.hand_angles().minute, 90.0);
        assert_eq!(sim.hand_angles().second, 240.0);
    }

    #[test]
    fn sun_orientation_lags_then_converges() {
        // 12:00 -> angle 70, far from the identity start
        let mut sim = manual_sim(12, 0, 0);
        sim.tick(Frame::new(noon(), 0.1));
        let target = SunState::new(1.0, sim.sun_angle()).target_orientation();
        let early_gap = sim.sun_orientation().angle_between(target);
        assert!(early_gap > 0.1, "sun should lag after one frame");

        for _ in 0..300 {
            sim.tick(Frame::new(noon(), 0.1));
        }
        let late_gap = sim.sun_orientation().angle_between(target);
        assert!(late_gap < 0.01, "sun should settle, gap was {late_gap}");
    }

    #[test]
    fn events_are_frame_stamped() {
        let mut sim = ClockSimulator::new(ClockConfig::default());
        sim.tick(Frame::new(noon(), 0.016));
        sim.tick(Frame::new(noon(), 0.016).with_toggle());
        let toggled = sim.events().events_at_frame(2);
        assert_eq!(toggled.len(), 1);
        assert_eq!(sim.frames(), 2);
    }

    #[test]
    fn snapshot_collects_derived_state() {
        let mut sim = manual_sim(9, 41, 23);
        sim.tick(Frame::new(noon(), 0.016));
        let snap = sim.snapshot();
        assert_eq!(snap.digital_time, "09:41:23");
        assert_eq!(snap.mode, TimeMode::Manual);
        assert_eq!(snap.hands, sim.hand_angles());
        assert_eq!(snap.sun_angle_degrees, sim.sun_angle());
        assert_eq!(snap.lights_on, sim.lights_on());
        assert_eq!(&snap.preset, sim.active_preset());
    }
}

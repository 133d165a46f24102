//! Frame-driven day/night clock simulation for Uhrwerk.
//!
//! A [`ClockSimulator`] projects a time source onto clock-hand angles, a
//! smoothed sun orientation, a digital time label, and a binary day/night
//! lighting preset. The host loop calls [`ClockSimulator::tick`] once per
//! rendered frame and reads the derived state back; the simulation itself
//! never touches the scene graph, materials, or input devices.

/// Configuration for a simulation.
pub mod config;
/// Error types for the simulation crate.
pub mod error;
/// Simulation event types and the event log.
pub mod event;
/// Day/night lighting state and preset application.
pub mod lighting;
/// The three time-source policies.
pub mod mode;
/// The per-frame simulation orchestrator.
pub mod simulator;
/// Sun angle math and the smoothed sun orientation.
pub mod sun;

/// Re-export of [`config::ClockConfig`].
pub use config::ClockConfig;
/// Re-exports of [`error::ClockError`] and [`error::ClockResult`].
pub use error::{ClockError, ClockResult};
/// Re-exports of [`event::ClockEvent`], [`event::ClockEventKind`], and
/// [`event::EventLog`].
pub use event::{ClockEvent, ClockEventKind, EventLog};
/// Re-export of [`lighting::LightingState`].
pub use lighting::LightingState;
/// Re-export of [`mode::TimeMode`].
pub use mode::TimeMode;
/// Re-exports of [`simulator::ClockSimulator`], [`simulator::ClockSnapshot`],
/// and [`simulator::Frame`].
pub use simulator::{ClockSimulator, ClockSnapshot, Frame};
/// Re-exports of [`sun::SunState`] and the sun angle helpers.
pub use sun::{SunState, is_night_angle, sun_angle_degrees};

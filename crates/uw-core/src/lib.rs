//! Core types for Uhrwerk: time-of-day values, dial angle math, and
//! lighting asset handles.
//!
//! This crate defines the value types the simulation projects onto. It is
//! independent of any frame loop or rendering backend — you can compute
//! hand angles or format a digital label without ever constructing a
//! simulator.

/// Dial angle constants and hand-angle computation.
pub mod angle;
/// Opaque asset handles and day/night lighting presets.
pub mod assets;
/// Integer and fractional time-of-day representations.
pub mod time;

/// Re-export dial angle types.
pub use angle::{HandAngles, normalize_degrees};
/// Re-export asset handle and preset types.
pub use assets::{LightingPreset, MaterialHandle, NodeHandle, PresetPair};
/// Re-export time-of-day types.
pub use time::{DaySpan, TimeOfDay};

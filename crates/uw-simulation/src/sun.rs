use glam::{EulerRot, Quat};

/// Calibration offset aligning angle 0 with the host's sun-rotation
/// convention (a zero rotation does not correspond to midnight or noon).
pub const SUN_ANGLE_OFFSET: i32 = -110;

/// Fixed tilt of the sun's orbital plane, in degrees.
pub const SUN_TILT_DEGREES: f32 = 8.0;

/// Target sun elevation for a clock reading, in whole degrees.
///
/// A pure function of hours and minutes; seconds never move the sun.
/// The fractional sum is truncated toward zero before the calibration
/// offset is added.
pub fn sun_angle_degrees(hours: i32, minutes: i32) -> i32 {
    (f64::from(hours) * 15.0 + f64::from(minutes) * 0.25).trunc() as i32 + SUN_ANGLE_OFFSET
}

/// Whether a sun angle falls on the night side of the day band.
///
/// The band is evaluated on the signed remainder of the angle by 360;
/// `[-13, 190]` counts as day, everything outside as night.
pub fn is_night_angle(angle_degrees: i32) -> bool {
    !(-13..=190).contains(&(angle_degrees % 360))
}

/// The virtual sun: a target elevation plus the smoothed orientation a
/// renderer would apply to its directional light.
///
/// The rendered orientation is not snapped to the target. Each frame it
/// is spherically interpolated toward the target by an unclamped factor
/// of `rotation_speed * dt`, so it lags the true angle and converges
/// only as frames accumulate.
#[derive(Debug, Clone, Copy)]
pub struct SunState {
    target_angle: i32,
    rendered: Quat,
    rotation_speed: f32,
}

impl SunState {
    /// Create a sun aimed at an initial target angle. The rendered
    /// orientation starts at identity (whatever the scene default is)
    /// and settles toward the target over subsequent frames.
    pub fn new(rotation_speed: f32, initial_angle: i32) -> Self {
        Self {
            target_angle: initial_angle,
            rendered: Quat::IDENTITY,
            rotation_speed,
        }
    }

    /// Retarget the sun and advance the rendered orientation one
    /// smoothing step of `rotation_speed * dt`.
    pub fn advance(&mut self, angle_degrees: i32, dt: f32) {
        self.target_angle = angle_degrees;
        let target = orientation_for(angle_degrees);
        self.rendered = self.rendered.slerp(target, self.rotation_speed * dt);
    }

    /// The current target elevation in whole degrees.
    pub fn target_angle(&self) -> i32 {
        self.target_angle
    }

    /// The orientation the target angle maps to.
    pub fn target_orientation(&self) -> Quat {
        orientation_for(self.target_angle)
    }

    /// The smoothed orientation as of the last advance.
    pub fn rendered(&self) -> Quat {
        self.rendered
    }

    /// The configured smoothing-rate multiplier.
    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed
    }
}

/// Orientation for a sun elevation: pitch by the angle, yaw by the
/// fixed tilt, no roll.
fn orientation_for(angle_degrees: i32) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        SUN_TILT_DEGREES.to_radians(),
        (angle_degrees as f32).to_radians(),
        0.0,
    )
}

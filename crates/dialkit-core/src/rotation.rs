//! Rotation accumulation with wraparound at 0°/360°.

use kurbo::Vec2;

use crate::turn::TurnDirection;

/// Divisor applied to the configured motion speed.
///
/// With a motion speed of 1.0, roughly 11.5 px of drag turn the dial by 1°.
pub const MOTION_SPEED_SCALE: f64 = 11.5;

/// Wrap any finite angle into `[0, 360)`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    (degrees % 360.0 + 360.0) % 360.0
}

/// Degrees of rotation produced by a single drag displacement.
///
/// Zero or non-finite displacements yield no rotation.
pub fn rotation_magnitude(delta: Vec2, motion_speed: f64) -> f64 {
    let magnitude = delta.hypot() * motion_speed / MOTION_SPEED_SCALE;
    if magnitude.is_finite() { magnitude } else { 0.0 }
}

/// Integrate a signed magnitude into a running total in `[0, 360)`.
pub fn integrate(previous_total: f64, direction: TurnDirection, magnitude: f64) -> f64 {
    normalize_degrees(previous_total + direction.signum() * magnitude)
}

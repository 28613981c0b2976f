//! Motion-range policy: keeping the rotation inside the tick arc.

use serde::{Deserialize, Serialize};

/// How far the dial is allowed to turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionRange {
    /// Free rotation over the full circle.
    #[default]
    None,
    /// Rotation is restricted to the `[start, end]` tick arc.
    #[serde(alias = "in_ticks", alias = "clampToTicks", alias = "inTicks")]
    ClampToTicks,
}

impl MotionRange {
    /// Apply the policy to an accumulated total.
    pub fn apply(self, total: f64, start_angle: f64, end_angle: f64) -> f64 {
        match self {
            MotionRange::None => total,
            MotionRange::ClampToTicks => clamp_to_arc(total, start_angle, end_angle),
        }
    }
}

/// Clamp `total` into the arc running clockwise from `start_angle` to
/// `end_angle`.
///
/// When the arc wraps through 0° (`start_angle >= end_angle`), a total
/// inside the excluded arc moves to the angularly closer boundary. Equal
/// distances resolve to `start_angle`.
pub fn clamp_to_arc(total: f64, start_angle: f64, end_angle: f64) -> f64 {
    if start_angle < end_angle {
        return total.clamp(start_angle, end_angle);
    }

    let excluded = end_angle < total && total < start_angle;
    if !excluded {
        return total;
    }

    if start_angle - total <= total - end_angle {
        start_angle
    } else {
        end_angle
    }
}

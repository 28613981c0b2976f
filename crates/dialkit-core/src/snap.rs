//! Snap functionality for aligning the reported rotation to ticks.

use serde::{Deserialize, Serialize};

use crate::rotation::normalize_degrees;

/// Snap mode applied to the reported rotation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapMode {
    /// Report the raw rotation.
    #[default]
    None,
    /// Snap to the nearest generated tick within half a tick step.
    Ticks,
    /// Round to the nearest multiple of a fixed step, ignoring the tick arc.
    Step(f64),
}

impl SnapMode {
    /// Check if any snapping is enabled.
    pub fn is_enabled(self) -> bool {
        self != SnapMode::None
    }
}

/// Distance measure used when matching a rotation against a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickDistance {
    /// `|total - tick| mod 180`.
    ///
    /// Folds at 180° rather than measuring around the circle, so a total
    /// of 359° does not match a tick at 0°. Kept as the default for
    /// compatibility with existing dials.
    #[default]
    Folded,
    /// True shortest distance around the circle, `min(d, 360 - d)`.
    Circular,
}

impl TickDistance {
    pub fn measure(self, total: f64, tick: f64) -> f64 {
        match self {
            TickDistance::Folded => ((total - tick) % 180.0).abs(),
            TickDistance::Circular => {
                let d = normalize_degrees(total - tick);
                d.min(360.0 - d)
            }
        }
    }
}

/// The tick grid a rotation snaps against.
#[derive(Debug, Clone, Copy)]
pub struct TickGrid<'a> {
    /// Tick angles in generation order.
    pub angles: &'a [f64],
    pub start_angle: f64,
    pub end_angle: f64,
    pub step: f64,
    pub distance: TickDistance,
}

/// Snap a rotation to the first tick within half a step.
///
/// Totals sitting exactly on the arc boundaries are returned unchanged.
/// Ticks are scanned in order and the first match wins, so a total halfway
/// between two ticks snaps to the earlier one.
pub fn snap_to_ticks(total: f64, grid: &TickGrid<'_>) -> f64 {
    if total == grid.start_angle || total == grid.end_angle {
        return total;
    }

    let tolerance = grid.step / 2.0;
    grid.angles
        .iter()
        .copied()
        .find(|&tick| grid.distance.measure(total, tick) <= tolerance)
        .unwrap_or(total)
}

/// Snap an angle to the nearest multiple of `step`.
/// Returns the snapped angle in degrees (0-360).
pub fn snap_to_step(total: f64, step: f64) -> f64 {
    normalize_degrees((total / step).round() * step)
}

/// Apply a snap mode to a rotation.
pub fn snap_rotation(total: f64, mode: SnapMode, grid: &TickGrid<'_>) -> f64 {
    match mode {
        SnapMode::None => total,
        SnapMode::Ticks if grid.angles.is_empty() => total,
        SnapMode::Ticks => snap_to_ticks(total, grid),
        SnapMode::Step(step) => snap_to_step(total, step),
    }
}

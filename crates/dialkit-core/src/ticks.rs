//! Tick configuration and tick/label generation.

use crate::error::{DialError, DialResult};
use crate::rotation::normalize_degrees;
use crate::snap::{TickDistance, TickGrid};

/// Upper bound on generated ticks, one per tenth of a degree.
pub const MAX_TICKS: usize = 3600;

/// A single tick mark with its label.
#[derive(Debug, Clone, PartialEq)]
pub struct TickMark {
    /// Angle in degrees, `[0, 360)`, clockwise from the top of the dial.
    pub angle: f64,
    /// Text drawn next to the tick. May be empty.
    pub label: String,
}

/// The tick arc of a dial: where ticks start, end, and how far apart they are.
///
/// Immutable once built. Construction rejects steps and arcs that would
/// make tick generation degenerate.
#[derive(Debug, Clone, PartialEq)]
pub struct TickConfiguration {
    start_angle: f64,
    end_angle: f64,
    step: f64,
    labels: Vec<String>,
    angles: Vec<f64>,
}

impl TickConfiguration {
    /// Build and validate a tick configuration.
    ///
    /// Angles must lie in `[0, 360]`. A start of 360° is stored as 0°, so
    /// `360..0` is the same empty arc as `0..0`. An end of 360° is kept
    /// as-is and `0..360` covers the full circle. An arc with
    /// `start_angle >= end_angle` wraps through 0°.
    pub fn new(start_angle: f64, end_angle: f64, step: f64, labels: Vec<String>) -> DialResult<Self> {
        check_angle("tick_start_angle", start_angle)?;
        check_angle("tick_end_angle", end_angle)?;
        if !step.is_finite() || step <= 0.0 || step > 360.0 {
            return Err(DialError::InvalidStep(step));
        }
        if 360.0 / step > MAX_TICKS as f64 {
            return Err(DialError::TooManyTicks { step, max: MAX_TICKS });
        }
        if start_angle == end_angle {
            return Err(DialError::DegenerateArc(start_angle));
        }
        let start_angle = normalize_degrees(start_angle);
        if start_angle == end_angle {
            return Err(DialError::DegenerateArc(start_angle));
        }

        let angles = generate_angles(start_angle, end_angle, step);
        Ok(Self {
            start_angle,
            end_angle,
            step,
            labels,
            angles,
        })
    }

    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    pub fn end_angle(&self) -> f64 {
        self.end_angle
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Whether the arc wraps through 0°.
    pub fn wraps(&self) -> bool {
        self.start_angle >= self.end_angle
    }

    /// Whether `angle` lies on the tick arc, boundaries included.
    pub fn contains(&self, angle: f64) -> bool {
        if self.wraps() {
            angle <= self.end_angle || self.start_angle <= angle
        } else {
            self.start_angle <= angle && angle <= self.end_angle
        }
    }

    /// Tick angles in generation order: ascending from the start angle,
    /// wrapping at 360°.
    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    /// Tick marks paired with their labels.
    ///
    /// With a label list, the n-th tick takes the n-th label and ticks past
    /// the end of the list get an empty label. Without one, each tick is
    /// labelled with its angle.
    pub fn marks(&self) -> Vec<TickMark> {
        self.angles
            .iter()
            .enumerate()
            .map(|(index, &angle)| {
                let label = if self.labels.is_empty() {
                    format_angle(angle)
                } else {
                    self.labels.get(index).cloned().unwrap_or_default()
                };
                TickMark { angle, label }
            })
            .collect()
    }

    /// Borrow this configuration as a snap grid.
    pub fn grid(&self, distance: TickDistance) -> TickGrid<'_> {
        TickGrid {
            angles: &self.angles,
            start_angle: self.start_angle,
            end_angle: self.end_angle,
            step: self.step,
            distance,
        }
    }
}

fn check_angle(name: &'static str, value: f64) -> DialResult<()> {
    if value.is_finite() && (0.0..=360.0).contains(&value) {
        Ok(())
    } else {
        Err(DialError::AngleOutOfRange { name, value })
    }
}

/// Walk one full turn from `start_angle` in `step` increments, keeping the
/// angles that fall on the arc.
fn generate_angles(start_angle: f64, end_angle: f64, step: f64) -> Vec<f64> {
    let wraps = start_angle >= end_angle;
    let mut angles = Vec::new();
    let mut index = 0u32;
    loop {
        // Multiply rather than accumulate so long walks do not drift.
        let offset = f64::from(index) * step;
        if offset >= 360.0 {
            break;
        }
        index += 1;

        let angle = (start_angle + offset) % 360.0;
        let on_arc = if wraps {
            angle <= end_angle || start_angle <= angle
        } else {
            start_angle <= angle && angle <= end_angle
        };
        if on_arc {
            angles.push(angle);
        }
    }
    angles
}

fn format_angle(angle: f64) -> String {
    if angle.fract() == 0.0 {
        format!("{}", angle as i64)
    } else {
        format!("{angle}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_circle_generation() {
        let ticks = TickConfiguration::new(0.0, 360.0, 10.0, vec![]).unwrap();
        let angles = ticks.angles();
        assert_eq!(angles.len(), 36);
        assert_eq!(angles[0], 0.0);
        assert_eq!(angles[35], 350.0);
        assert!(angles.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_partial_arc_generation() {
        let ticks = TickConfiguration::new(30.0, 120.0, 30.0, vec![]).unwrap();
        assert_eq!(ticks.angles(), &[30.0, 60.0, 90.0, 120.0]);
    }

    #[test]
    fn test_wrapping_arc_generation() {
        let ticks = TickConfiguration::new(300.0, 60.0, 30.0, vec![]).unwrap();
        assert_eq!(ticks.angles(), &[300.0, 330.0, 0.0, 30.0, 60.0]);
        assert!(ticks.wraps());
        assert!(ticks.contains(10.0));
        assert!(!ticks.contains(180.0));
    }

    #[test]
    fn test_step_not_dividing_arc() {
        let ticks = TickConfiguration::new(0.0, 100.0, 45.0, vec![]).unwrap();
        assert_eq!(ticks.angles(), &[0.0, 45.0, 90.0]);
    }

    #[test]
    fn test_labels_from_list() {
        let labels = vec!["low".to_string(), "mid".to_string()];
        let ticks = TickConfiguration::new(0.0, 90.0, 45.0, labels).unwrap();
        let marks = ticks.marks();
        assert_eq!(marks.len(), 3);
        assert_eq!(marks[0].label, "low");
        assert_eq!(marks[1].label, "mid");
        assert_eq!(marks[2].label, "");
        assert_eq!(marks[2].angle, 90.0);
    }

    #[test]
    fn test_labels_from_angles() {
        let ticks = TickConfiguration::new(0.0, 20.0, 7.5, vec![]).unwrap();
        let labels: Vec<_> = ticks.marks().into_iter().map(|m| m.label).collect();
        assert_eq!(labels, vec!["0", "7.5", "15"]);
    }

    #[test]
    fn test_rejects_bad_step() {
        assert!(matches!(
            TickConfiguration::new(0.0, 360.0, 0.0, vec![]),
            Err(DialError::InvalidStep(_))
        ));
        assert!(matches!(
            TickConfiguration::new(0.0, 360.0, -5.0, vec![]),
            Err(DialError::InvalidStep(_))
        ));
        assert!(matches!(
            TickConfiguration::new(0.0, 360.0, f64::NAN, vec![]),
            Err(DialError::InvalidStep(_))
        ));
    }

    #[test]
    fn test_rejects_degenerate_arc() {
        assert!(matches!(
            TickConfiguration::new(90.0, 90.0, 10.0, vec![]),
            Err(DialError::DegenerateArc(_))
        ));
    }

    #[test]
    fn test_rejects_full_turn_degenerate_arc() {
        assert!(matches!(
            TickConfiguration::new(360.0, 0.0, 10.0, vec![]),
            Err(DialError::DegenerateArc(_))
        ));
        assert!(matches!(
            TickConfiguration::new(360.0, 360.0, 10.0, vec![]),
            Err(DialError::DegenerateArc(_))
        ));
    }

    #[test]
    fn test_start_of_360_is_stored_as_zero() {
        let ticks = TickConfiguration::new(360.0, 90.0, 45.0, vec![]).unwrap();
        assert_eq!(ticks.start_angle(), 0.0);
        assert!(!ticks.wraps());
        assert_eq!(ticks.angles(), &[0.0, 45.0, 90.0]);
    }

    #[test]
    fn test_rejects_too_many_ticks() {
        assert!(matches!(
            TickConfiguration::new(0.0, 360.0, 1e-5, vec![]),
            Err(DialError::TooManyTicks { max: MAX_TICKS, .. })
        ));
        assert!(matches!(
            TickConfiguration::new(0.0, 360.0, 1e-9, vec![]),
            Err(DialError::TooManyTicks { .. })
        ));
        let finest = TickConfiguration::new(0.0, 360.0, 0.1, vec![]).unwrap();
        assert!(finest.angles().len() <= MAX_TICKS);
    }

    #[test]
    fn test_rejects_out_of_range_angle() {
        assert!(matches!(
            TickConfiguration::new(-10.0, 90.0, 10.0, vec![]),
            Err(DialError::AngleOutOfRange { name: "tick_start_angle", .. })
        ));
        assert!(matches!(
            TickConfiguration::new(0.0, 400.0, 10.0, vec![]),
            Err(DialError::AngleOutOfRange { name: "tick_end_angle", .. })
        ));
    }
}

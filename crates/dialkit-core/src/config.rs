//! Host-facing dial configuration.

use serde::{Deserialize, Serialize};

use crate::error::{DialError, DialResult};
use crate::motion::MotionRange;
use crate::snap::{SnapMode, TickDistance};
use crate::ticks::TickConfiguration;

/// Default dial diameter in pixels.
pub const DEFAULT_DIAL_SIZE: f64 = 200.0;
/// Default tick spacing in degrees.
pub const DEFAULT_TICK_STEP: f64 = 10.0;
/// Default motion speed (gain applied to drag distance).
pub const DEFAULT_MOTION_SPEED: f64 = 1.0;

/// Indicator drawn on the rotating face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerMark {
    #[default]
    Triangle,
    Circle,
    None,
}

/// Which side of the ring tick lines are drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickPosition {
    #[default]
    Inside,
    Outside,
}

/// Configuration supplied once when a dial is created.
///
/// Every field has a default, so hosts only need to spell out what they
/// change. Only `initial_rotation` may be reapplied later, through
/// [`crate::AngleIntegrator::set_rotation`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialConfig {
    /// Dial diameter in pixels.
    pub dial_size: f64,
    /// First tick angle, degrees clockwise from the top.
    pub tick_start_angle: f64,
    /// Last tick angle. Smaller than the start angle for arcs through 0°.
    pub tick_end_angle: f64,
    pub tick_step: f64,
    /// Optional labels, assigned to ticks in generation order.
    pub tick_labels: Vec<String>,
    pub show_tick_labels: bool,
    pub tick_position: TickPosition,
    pub tick_line_length: f64,
    pub tick_label_font_size: f64,
    pub snap: SnapMode,
    pub tick_distance: TickDistance,
    pub motion_range: MotionRange,
    /// Gain applied to drag distance. See [`crate::rotation::MOTION_SPEED_SCALE`].
    pub motion_speed: f64,
    pub initial_rotation: f64,
    pub pointer_mark: PointerMark,
}

impl Default for DialConfig {
    fn default() -> Self {
        Self {
            dial_size: DEFAULT_DIAL_SIZE,
            tick_start_angle: 0.0,
            tick_end_angle: 360.0,
            tick_step: DEFAULT_TICK_STEP,
            tick_labels: Vec::new(),
            show_tick_labels: true,
            tick_position: TickPosition::default(),
            tick_line_length: 8.0,
            tick_label_font_size: 6.0,
            snap: SnapMode::default(),
            tick_distance: TickDistance::default(),
            motion_range: MotionRange::default(),
            motion_speed: DEFAULT_MOTION_SPEED,
            initial_rotation: 0.0,
            pointer_mark: PointerMark::default(),
        }
    }
}

impl DialConfig {
    /// Parse a configuration from JSON and validate it.
    pub fn from_json(json: &str) -> DialResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        log::debug!("Loaded dial config: {:?}", config);
        Ok(config)
    }

    /// Serialize the configuration to pretty-printed JSON.
    pub fn to_json(&self) -> DialResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every field and build the tick configuration.
    pub fn tick_configuration(&self) -> DialResult<TickConfiguration> {
        TickConfiguration::new(
            self.tick_start_angle,
            self.tick_end_angle,
            self.tick_step,
            self.tick_labels.clone(),
        )
    }

    /// Reject configurations that would make the dial misbehave.
    pub fn validate(&self) -> DialResult<()> {
        let result = self.check();
        if let Err(e) = &result {
            log::warn!("Rejected dial config: {}", e);
        }
        result
    }

    fn check(&self) -> DialResult<()> {
        if !self.dial_size.is_finite() || self.dial_size <= 0.0 {
            return Err(DialError::InvalidDialSize(self.dial_size));
        }
        if !self.motion_speed.is_finite() || self.motion_speed < 0.0 {
            return Err(DialError::InvalidMotionSpeed(self.motion_speed));
        }
        if !self.initial_rotation.is_finite() {
            return Err(DialError::NonFiniteRotation(self.initial_rotation));
        }
        if let SnapMode::Step(step) = self.snap {
            if !step.is_finite() || step <= 0.0 || step > 360.0 {
                return Err(DialError::InvalidStep(step));
            }
        }
        self.tick_configuration().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = DialConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.pointer_mark, PointerMark::Triangle);
        assert_eq!(config.tick_position, TickPosition::Inside);
        assert_eq!(config.motion_range, MotionRange::None);
        assert_eq!(config.snap, SnapMode::None);
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = DialConfig::from_json(
            r#"{
                "tick_start_angle": 300,
                "tick_end_angle": 60,
                "snap": "ticks",
                "motion_range": "in_ticks",
                "pointer_mark": "circle"
            }"#,
        )
        .unwrap();
        assert_eq!(config.tick_start_angle, 300.0);
        assert_eq!(config.tick_end_angle, 60.0);
        assert_eq!(config.snap, SnapMode::Ticks);
        assert_eq!(config.motion_range, MotionRange::ClampToTicks);
        assert_eq!(config.pointer_mark, PointerMark::Circle);
        assert_eq!(config.dial_size, DEFAULT_DIAL_SIZE);
        assert_eq!(config.tick_step, DEFAULT_TICK_STEP);
    }

    #[test]
    fn test_from_json_step_snap() {
        let config = DialConfig::from_json(r#"{ "snap": { "step": 15 } }"#).unwrap();
        assert_eq!(config.snap, SnapMode::Step(15.0));
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        assert!(matches!(
            DialConfig::from_json(r#"{ "tick_step": 0 }"#),
            Err(DialError::InvalidStep(_))
        ));
        assert!(matches!(
            DialConfig::from_json(r#"{ "tick_start_angle": 45, "tick_end_angle": 45 }"#),
            Err(DialError::DegenerateArc(_))
        ));
        assert!(matches!(
            DialConfig::from_json(r#"{ "tick_step": 0.00001 }"#),
            Err(DialError::TooManyTicks { .. })
        ));
        assert!(matches!(
            DialConfig::from_json(r#"{ "dial_size": -1 }"#),
            Err(DialError::InvalidDialSize(_))
        ));
        assert!(matches!(
            DialConfig::from_json(r#"{ "motion_speed": -2 }"#),
            Err(DialError::InvalidMotionSpeed(_))
        ));
        assert!(matches!(
            DialConfig::from_json(r#"{ "snap": { "step": 0 } }"#),
            Err(DialError::InvalidStep(_))
        ));
    }

    #[test]
    fn test_from_json_parse_error() {
        assert!(matches!(
            DialConfig::from_json("{ not json"),
            Err(DialError::Parse(_))
        ));
        assert!(matches!(
            DialConfig::from_json(r#"{ "motion_range": "sideways" }"#),
            Err(DialError::Parse(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let config = DialConfig {
            snap: SnapMode::Step(5.0),
            tick_labels: vec!["a".to_string()],
            ..Default::default()
        };
        let json = config.to_json().unwrap();
        let restored = DialConfig::from_json(&json).unwrap();
        assert_eq!(config, restored);
    }
}

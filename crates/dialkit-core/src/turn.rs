//! Turn-direction resolution from drag displacement.

use kurbo::Vec2;

use crate::geometry::StartQuadrant;

/// Direction the dial turns for one drag segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnDirection {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl TurnDirection {
    fn from_clockwise(clockwise: bool) -> Self {
        if clockwise {
            Self::Clockwise
        } else {
            Self::CounterClockwise
        }
    }

    pub fn is_clockwise(self) -> bool {
        self == Self::Clockwise
    }

    /// Sign applied to a rotation magnitude.
    pub fn signum(self) -> f64 {
        match self {
            Self::Clockwise => 1.0,
            Self::CounterClockwise => -1.0,
        }
    }
}

/// Axis along which a drag segment moved the most.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DominantAxis {
    X,
    Y,
}

impl DominantAxis {
    /// Pick the dominant axis of a displacement. Ties go to `Y`.
    pub fn of(delta: Vec2) -> Self {
        if delta.x * delta.x > delta.y * delta.y {
            Self::X
        } else {
            Self::Y
        }
    }
}

/// Resolve which way the dial turns for a displacement that started in
/// `quadrant`.
///
/// Near the top of the dial rightward motion turns clockwise, near the
/// bottom it turns counter-clockwise. On the left half downward motion
/// turns counter-clockwise, on the right half clockwise.
pub fn resolve_turn(quadrant: StartQuadrant, delta: Vec2) -> TurnDirection {
    let move_right = delta.x > 0.0;
    let move_down = delta.y > 0.0;

    let clockwise = match (DominantAxis::of(delta), quadrant.is_upper(), quadrant.is_left()) {
        (DominantAxis::X, true, _) => move_right,
        (DominantAxis::X, false, _) => !move_right,
        (DominantAxis::Y, _, true) => !move_down,
        (DominantAxis::Y, _, false) => move_down,
    };

    TurnDirection::from_clockwise(clockwise)
}

//! DialKit Core Library
//!
//! Platform-agnostic gesture-to-rotation logic for rotary dial controls:
//! pointer samples and widget geometry go in, a rotation in degrees comes
//! out, with optional motion-range clamping and tick snapping.

pub mod config;
pub mod control;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod integrator;
pub mod motion;
pub mod rotation;
pub mod snap;
pub mod ticks;
pub mod turn;

pub use config::{DialConfig, PointerMark, TickPosition};
pub use control::{DialControl, DialEvent};
pub use drag::{DragSegment, DragState};
pub use error::{DialError, DialResult};
pub use geometry::{DialGeometry, StartQuadrant};
pub use integrator::AngleIntegrator;
pub use motion::{MotionRange, clamp_to_arc};
pub use rotation::{MOTION_SPEED_SCALE, integrate, normalize_degrees, rotation_magnitude};
pub use snap::{SnapMode, TickDistance, TickGrid, snap_rotation, snap_to_step, snap_to_ticks};
pub use ticks::{MAX_TICKS, TickConfiguration, TickMark};
pub use turn::{DominantAxis, TurnDirection, resolve_turn};

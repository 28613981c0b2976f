//! Per-dial angle integration: pointer samples in, rotation values out.

use kurbo::Point;

use crate::config::DialConfig;
use crate::drag::DragState;
use crate::error::{DialError, DialResult};
use crate::geometry::DialGeometry;
use crate::motion::MotionRange;
use crate::rotation::{integrate, normalize_degrees, rotation_magnitude};
use crate::snap::{SnapMode, TickDistance, snap_rotation};
use crate::ticks::{TickConfiguration, TickMark};
use crate::turn::resolve_turn;

/// Turns a stream of pointer samples into a rotation in degrees.
///
/// Each dial owns its own integrator, so several dials can be dragged
/// independently. The accumulated rotation survives across drags; the
/// drag tracking does not.
#[derive(Debug, Clone)]
pub struct AngleIntegrator {
    geometry: DialGeometry,
    drag: DragState,
    /// Accumulated rotation, clamped but never snapped.
    rotation: f64,
    ticks: TickConfiguration,
    motion_range: MotionRange,
    snap: SnapMode,
    tick_distance: TickDistance,
    motion_speed: f64,
}

impl AngleIntegrator {
    /// Create an integrator from a validated configuration.
    pub fn new(config: &DialConfig) -> DialResult<Self> {
        config.validate()?;
        let mut integrator = Self {
            geometry: DialGeometry::default(),
            drag: DragState::new(),
            rotation: 0.0,
            ticks: config.tick_configuration()?,
            motion_range: config.motion_range,
            snap: config.snap,
            tick_distance: config.tick_distance,
            motion_speed: config.motion_speed,
        };
        integrator.set_rotation(config.initial_rotation)?;
        Ok(integrator)
    }

    /// Record a new layout measurement from the host.
    pub fn set_geometry(&mut self, geometry: DialGeometry) {
        self.geometry = geometry;
    }

    pub fn geometry(&self) -> DialGeometry {
        self.geometry
    }

    /// Replace the accumulated rotation, e.g. when the host reapplies the
    /// initial rotation. The value is wrapped into `[0, 360)` and clamped
    /// to the motion range.
    pub fn set_rotation(&mut self, degrees: f64) -> DialResult<()> {
        if !degrees.is_finite() {
            return Err(DialError::NonFiniteRotation(degrees));
        }
        self.rotation = self.clamp(normalize_degrees(degrees));
        Ok(())
    }

    /// Accumulated rotation before snapping.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Rotation as reported to the host, with snapping applied.
    pub fn reported_rotation(&self) -> f64 {
        snap_rotation(
            self.rotation,
            self.snap,
            &self.ticks.grid(self.tick_distance),
        )
    }

    /// Process an absolute pointer position from the host's gesture stream.
    ///
    /// Returns the reported rotation, or `None` for the first sample of a
    /// drag, which only establishes the starting point.
    pub fn pointer_move(&mut self, screen_point: Point) -> Option<f64> {
        let local = self.geometry.to_local(screen_point);
        let Some(segment) = self.drag.advance(local) else {
            log::debug!("Dial drag started at {:?}", local);
            return None;
        };

        let quadrant = self.geometry.classify(segment.from);
        let direction = resolve_turn(quadrant, segment.delta);
        let magnitude = rotation_magnitude(segment.delta, self.motion_speed);

        let total = integrate(self.rotation, direction, magnitude);
        self.rotation = self.clamp(total);

        let reported = self.reported_rotation();
        log::trace!(
            "Dial sample {:?} {:?} {:?} {:.3}° -> {:.3}° (reported {:.3}°)",
            quadrant,
            segment.delta,
            direction,
            magnitude,
            self.rotation,
            reported
        );
        Some(reported)
    }

    /// Finish the current drag and return the final reported rotation.
    ///
    /// Safe to call without a preceding move; the drag tracking is always
    /// cleared.
    pub fn pointer_release(&mut self) -> f64 {
        self.drag.reset();
        self.rotation = self.clamp(self.rotation);
        let reported = self.reported_rotation();
        log::debug!("Dial released at {:.3}°", reported);
        reported
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    pub fn ticks(&self) -> &TickConfiguration {
        &self.ticks
    }

    /// Tick angles in generation order, for rendering.
    pub fn tick_angles(&self) -> &[f64] {
        self.ticks.angles()
    }

    /// Tick marks with labels, for rendering.
    pub fn tick_marks(&self) -> Vec<TickMark> {
        self.ticks.marks()
    }

    fn clamp(&self, total: f64) -> f64 {
        self.motion_range
            .apply(total, self.ticks.start_angle(), self.ticks.end_angle())
    }
}

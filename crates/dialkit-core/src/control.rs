//! Event routing and host callbacks for a dial.

use kurbo::Point;
use serde::{Deserialize, Serialize};

use crate::config::DialConfig;
use crate::error::DialResult;
use crate::geometry::DialGeometry;
use crate::integrator::AngleIntegrator;

/// Host event delivered to a dial, in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DialEvent {
    /// The widget was laid out or resized.
    Layout(DialGeometry),
    /// The active pointer moved to an absolute screen position.
    Move { position: Point },
    /// The active pointer was released.
    Release,
}

type Callback = Box<dyn FnMut(f64)>;

/// A dial control: an [`AngleIntegrator`] plus the host's change and
/// release callbacks.
///
/// Callbacks are optional; events are processed the same way without them.
pub struct DialControl {
    config: DialConfig,
    integrator: AngleIntegrator,
    on_change: Option<Callback>,
    on_release: Option<Callback>,
}

impl std::fmt::Debug for DialControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialControl")
            .field("config", &self.config)
            .field("integrator", &self.integrator)
            .field("on_change", &self.on_change.is_some())
            .field("on_release", &self.on_release.is_some())
            .finish()
    }
}

impl DialControl {
    /// Create a dial from its configuration.
    pub fn new(config: DialConfig) -> DialResult<Self> {
        let integrator = AngleIntegrator::new(&config)?;
        Ok(Self {
            config,
            integrator,
            on_change: None,
            on_release: None,
        })
    }

    /// Set the callback invoked after every processed move sample.
    pub fn on_change(mut self, callback: impl FnMut(f64) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Set the callback invoked once per completed drag.
    pub fn on_release(mut self, callback: impl FnMut(f64) + 'static) -> Self {
        self.on_release = Some(Box::new(callback));
        self
    }

    pub fn config(&self) -> &DialConfig {
        &self.config
    }

    pub fn integrator(&self) -> &AngleIntegrator {
        &self.integrator
    }

    /// Current rotation as shown to the user, snapping applied.
    pub fn rotation(&self) -> f64 {
        self.integrator.reported_rotation()
    }

    /// Reapply an initial rotation supplied by the host.
    pub fn set_rotation(&mut self, degrees: f64) -> DialResult<()> {
        self.integrator.set_rotation(degrees)
    }

    /// Process a host event.
    pub fn handle_event(&mut self, event: DialEvent) {
        match event {
            DialEvent::Layout(geometry) => self.set_geometry(geometry),
            DialEvent::Move { position } => {
                self.pointer_move(position);
            }
            DialEvent::Release => {
                self.pointer_release();
            }
        }
    }

    pub fn set_geometry(&mut self, geometry: DialGeometry) {
        self.integrator.set_geometry(geometry);
    }

    /// Feed one pointer sample; fires `on_change` when a rotation results.
    pub fn pointer_move(&mut self, position: Point) -> Option<f64> {
        let rotation = self.integrator.pointer_move(position)?;
        if let Some(callback) = self.on_change.as_mut() {
            callback(rotation);
        }
        Some(rotation)
    }

    /// End the drag; always fires `on_release`.
    pub fn pointer_release(&mut self) -> f64 {
        let rotation = self.integrator.pointer_release();
        if let Some(callback) = self.on_release.as_mut() {
            callback(rotation);
        }
        rotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<f64>>>, impl FnMut(f64) + 'static) {
        let values = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&values);
        (values, move |v: f64| sink.borrow_mut().push(v))
    }

    #[test]
    fn test_end_to_end_drag() {
        let (changes, on_change) = recorder();
        let (releases, on_release) = recorder();
        let config = DialConfig {
            motion_speed: 5.0,
            ..Default::default()
        };
        let mut dial = DialControl::new(config)
            .unwrap()
            .on_change(on_change)
            .on_release(on_release);

        dial.handle_event(DialEvent::Layout(DialGeometry::new(20.0, 40.0, 200.0, 200.0)));
        // Local (160, 30): upper-right quadrant, then straight down 23 px.
        dial.handle_event(DialEvent::Move { position: Point::new(180.0, 70.0) });
        dial.handle_event(DialEvent::Move { position: Point::new(180.0, 93.0) });
        dial.handle_event(DialEvent::Release);

        let changes = changes.borrow();
        assert_eq!(changes.len(), 1);
        assert!((changes[0] - 10.0).abs() < 1e-9);
        let releases = releases.borrow();
        assert_eq!(releases.len(), 1);
        assert!((releases[0] - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_release_without_move_fires_callback() {
        let (releases, on_release) = recorder();
        let config = DialConfig {
            initial_rotation: 90.0,
            ..Default::default()
        };
        let mut dial = DialControl::new(config).unwrap().on_release(on_release);

        dial.handle_event(DialEvent::Release);

        assert_eq!(*releases.borrow(), vec![90.0]);
        assert!(!dial.integrator().is_dragging());
    }

    #[test]
    fn test_missing_callbacks_are_skipped() {
        let mut dial = DialControl::new(DialConfig::default()).unwrap();
        dial.set_geometry(DialGeometry::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(dial.pointer_move(Point::new(80.0, 10.0)), None);
        assert!(dial.pointer_move(Point::new(80.0, 40.0)).is_some());
        let released = dial.pointer_release();
        assert_eq!(released, dial.rotation());
    }

    #[test]
    fn test_set_rotation() {
        let mut dial = DialControl::new(DialConfig::default()).unwrap();
        dial.set_rotation(370.0).unwrap();
        assert!((dial.rotation() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_event_deserializes() {
        let event: DialEvent = serde_json::from_str(r#"{ "Move": { "position": { "x": 1.0, "y": 2.0 } } }"#).unwrap();
        assert_eq!(event, DialEvent::Move { position: Point::new(1.0, 2.0) });
    }
}

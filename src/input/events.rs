//! Platform-neutral gesture events.

use crate::draw::Point;

/// Pointer-drag gesture events in view-local coordinates.
///
/// Platform layers map their native touch or mouse events to these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Pointer went down (touch start / button press)
    Start(Point),
    /// Pointer moved while down
    Move(Point),
    /// Pointer lifted
    End,
}

impl GestureEvent {
    pub fn start(x: f64, y: f64) -> Self {
        GestureEvent::Start(Point::new(x, y))
    }

    pub fn moved(x: f64, y: f64) -> Self {
        GestureEvent::Move(Point::new(x, y))
    }
}

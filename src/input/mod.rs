//! Gesture handling and the stroke recording state machine.
//!
//! This module translates platform pointer events into strokes. It holds the
//! active drawing style (color, width, ink/erase) and the state machine that
//! turns start/move/end gestures into sealed strokes.

pub mod events;
pub mod observable;
pub mod state;
pub mod style;
pub mod tool;

// Re-export commonly used types at module level
pub use events::GestureEvent;
pub use observable::Observable;
pub use state::{Canvas, DrawingState};
pub use style::StyleState;
pub use tool::DrawingMode;

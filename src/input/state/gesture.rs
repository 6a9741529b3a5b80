use crate::draw::{ActiveStroke, Point};
use crate::input::events::GestureEvent;
use crate::session::SessionState;
use log::{debug, warn};

use super::{Canvas, DrawingState};

impl Canvas {
    /// Dispatches a gesture event to the matching handler.
    pub fn handle_gesture(&mut self, event: GestureEvent, session: &mut SessionState) {
        match event {
            GestureEvent::Start(point) => self.on_gesture_start(point, session),
            GestureEvent::Move(point) => self.on_gesture_move(point),
            GestureEvent::End => self.on_gesture_end(session),
        }
    }

    /// Processes a gesture start.
    ///
    /// # Behavior
    /// - While Idle: copies the current style into a new stroke starting at `point`
    /// - While Drawing (end event never arrived): seals the previous stroke as
    ///   is and exports the list, then starts the new one
    pub fn on_gesture_start(&mut self, point: Point, session: &mut SessionState) {
        if let DrawingState::Drawing { stroke } = std::mem::take(&mut self.state) {
            debug!(
                "Gesture start while drawing; keeping truncated stroke with {} points",
                stroke.points().len()
            );
            self.commit(stroke);
            self.export(session);
        }

        self.state = DrawingState::Drawing {
            stroke: ActiveStroke::begin(point, self.style.snapshot()),
        };
        self.needs_redraw = true;
    }

    /// Processes pointer motion; appends a point to the stroke being drawn.
    ///
    /// Ignored while Idle.
    pub fn on_gesture_move(&mut self, point: Point) {
        if let DrawingState::Drawing { stroke } = &mut self.state {
            stroke.push(point);
            self.needs_redraw = true;
        }
    }

    /// Processes a gesture end.
    ///
    /// Seals the current stroke, appends it to the list and exports the whole
    /// list to the session. Ignored while Idle.
    pub fn on_gesture_end(&mut self, session: &mut SessionState) {
        let DrawingState::Drawing { stroke } = std::mem::take(&mut self.state) else {
            return;
        };

        self.commit(stroke);
        self.export(session);
        self.needs_redraw = true;
    }

    fn commit(&mut self, stroke: ActiveStroke) {
        if !self.strokes.try_push(stroke.seal(), self.max_strokes) {
            warn!(
                "Stroke limit ({}) reached; discarding new stroke",
                self.max_strokes
            );
        }
    }
}

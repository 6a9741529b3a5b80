use crate::draw::{ComposeError, flatten, render};
use crate::session::SessionState;
use log::{debug, info, warn};

use super::Canvas;

impl Canvas {
    /// Removes every sealed stroke and clears the session copy.
    ///
    /// Safe to call repeatedly; a stroke still being drawn is left alone.
    pub fn clear(&mut self, session: &mut SessionState) {
        if !self.strokes.is_empty() {
            info!("Clearing {} strokes", self.strokes.len());
        }
        self.strokes.clear();
        session.clear_strokes();
        self.needs_redraw = true;
    }

    /// Copies the full stroke list into the session.
    pub fn export(&self, session: &mut SessionState) {
        session.set_strokes(self.strokes.clone());
        debug!("Exported {} strokes to session", self.strokes.len());
    }

    /// Replaces the live stroke list with the session copy.
    ///
    /// Used when the drawing view comes back after navigation.
    pub fn restore(&mut self, session: &SessionState) {
        self.strokes = session.strokes().clone();
        if self.max_strokes > 0 && self.strokes.len() > self.max_strokes {
            warn!(
                "Session holds {} strokes which exceeds the limit of {}; truncating",
                self.strokes.len(),
                self.max_strokes
            );
            self.strokes.truncate(self.max_strokes);
        }
        self.needs_redraw = true;
        debug!("Restored {} strokes from session", self.strokes.len());
    }

    /// Re-renders the layer from the stroke list and the in-progress stroke.
    pub fn redraw(&mut self) {
        let current = self
            .current_stroke()
            .map(|stroke| (stroke.points(), stroke.style()));
        render(&self.surface, &self.strokes, current);
        self.needs_redraw = false;
    }

    /// Flattens the drawing over the session's active background and stores
    /// the result as the session output.
    ///
    /// # Errors
    /// [`ComposeError::MissingBackground`] when neither a frame nor a snapshot
    /// is available; the session output is left untouched.
    pub fn create_flattened_input(
        &mut self,
        session: &mut SessionState,
    ) -> Result<(), ComposeError> {
        self.redraw();

        match flatten(&self.surface, session.active_background(), self.resampling) {
            Ok(image) => {
                info!(
                    "Flattened input created ({}x{}, {} strokes, frozen={})",
                    image.width(),
                    image.height(),
                    self.strokes.len(),
                    session.is_frozen()
                );
                session.set_output(Some(image));
                Ok(())
            }
            Err(err) => {
                warn!("Skipping flattened input: {}", err);
                Err(err)
            }
        }
    }
}

use super::reference::{ReferenceImage, ReferenceSelection};
use crate::draw::{Image, StrokeList};
use log::{debug, warn};

/// Data shared across drawing-view lifetimes for one application session.
///
/// Constructed explicitly at session start and passed to whichever component
/// needs it. Every setter replaces its field wholesale. Access is
/// single-threaded, so there is no locking.
#[derive(Debug, Default)]
pub struct SessionState {
    /// Most recent camera frame; each delivery replaces the previous one
    background: Option<Image>,
    /// Frame frozen by the user, shown instead of the live feed
    snapshot: Option<Image>,
    /// Last flattened drawing + background
    output: Option<Image>,
    /// Copy of the drawing's stroke list
    strokes: StrokeList,
    /// Whether the frozen snapshot is the active background
    frozen: bool,
    /// Reference hairstyles picked in the gallery
    references: ReferenceSelection,
}

impl SessionState {
    /// Creates a session with every field empty.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(&self) -> Option<&Image> {
        self.background.as_ref()
    }

    /// Replaces the latest camera frame.
    pub fn set_background(&mut self, image: Option<Image>) {
        self.background = image;
    }

    pub fn snapshot(&self) -> Option<&Image> {
        self.snapshot.as_ref()
    }

    pub fn set_snapshot(&mut self, image: Option<Image>) {
        self.snapshot = image;
    }

    pub fn output(&self) -> Option<&Image> {
        self.output.as_ref()
    }

    pub fn set_output(&mut self, image: Option<Image>) {
        self.output = image;
    }

    /// Removes and returns the flattened output, e.g. to hand it to a generator.
    pub fn take_output(&mut self) -> Option<Image> {
        self.output.take()
    }

    pub fn strokes(&self) -> &StrokeList {
        &self.strokes
    }

    pub fn set_strokes(&mut self, strokes: StrokeList) {
        self.strokes = strokes;
    }

    pub fn clear_strokes(&mut self) {
        self.strokes = StrokeList::new();
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn set_frozen(&mut self, frozen: bool) {
        self.frozen = frozen;
    }

    /// Freezes the current camera frame as the background.
    ///
    /// Returns `false` when no frame has been delivered yet; the session is
    /// left unchanged in that case.
    pub fn freeze(&mut self) -> bool {
        let Some(frame) = self.background.clone() else {
            warn!("No camera frame available for snapshot");
            return false;
        };
        debug!("Freezing {}x{} frame", frame.width(), frame.height());
        self.snapshot = Some(frame);
        self.frozen = true;
        true
    }

    /// Returns to the live feed. The snapshot is kept for later use.
    pub fn unfreeze(&mut self) {
        self.frozen = false;
    }

    /// Frozen snapshot when frozen, otherwise the latest camera frame.
    pub fn active_background(&self) -> Option<&Image> {
        if self.frozen {
            self.snapshot.as_ref()
        } else {
            self.background.as_ref()
        }
    }

    pub fn references(&self) -> &ReferenceSelection {
        &self.references
    }

    pub fn select_reference(&mut self, image: ReferenceImage) {
        self.references.select(image);
    }

    pub fn deselect_reference(&mut self, id: &str) {
        self.references.deselect(id);
    }

    pub fn clear_references(&mut self) {
        self.references.clear();
    }

    /// Releases every image and stroke held by the session.
    pub fn teardown(&mut self) {
        debug!("Tearing down session state");
        *self = Self::new();
    }
}

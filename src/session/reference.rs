//! Reference hairstyle selection kept across gallery visits.

use serde::{Deserialize, Serialize};

/// A gallery entry the user can pick as a style reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceImage {
    pub id: String,
    pub asset_path: String,
    pub thumbnail: String,
}

/// Selected references in the order they were picked, unique by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceSelection {
    selected: Vec<ReferenceImage>,
}

impl ReferenceSelection {
    /// Adds `image`; re-selecting an id replaces its data but keeps its position.
    pub fn select(&mut self, image: ReferenceImage) {
        match self.selected.iter_mut().find(|entry| entry.id == image.id) {
            Some(entry) => *entry = image,
            None => self.selected.push(image),
        }
    }

    pub fn deselect(&mut self, id: &str) {
        self.selected.retain(|entry| entry.id != id);
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|entry| entry.id == id)
    }

    pub fn selected(&self) -> &[ReferenceImage] {
        &self.selected
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

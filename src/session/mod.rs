//! Session-scoped shared state and stroke document persistence.
//!
//! [`SessionState`] keeps the background frame, flattened output and a copy of
//! the stroke list alive while the drawing view is torn down and recreated.
//! Stroke documents write a stroke list to disk with locking, optional
//! compression, and backup rotation.

mod document;
mod options;
mod reference;
mod state;

pub use document::{StrokeDocument, load_document, save_document};
pub use options::{
    CompressionMode, DEFAULT_AUTO_COMPRESS_THRESHOLD_BYTES, DocumentOptions, options_from_config,
};
pub use reference::{ReferenceImage, ReferenceSelection};
pub use state::SessionState;

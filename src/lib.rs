//! Hairstyle sketching core.
//!
//! Records freehand ink and erase strokes over a live camera frame, keeps the
//! drawing on its own transparent layer, and flattens that layer onto the
//! (optionally frozen) background at full camera resolution. The binary in
//! `main.rs` drives the same pipeline offline from stroke documents.

pub mod config;
pub mod draw;
pub mod input;
pub mod session;
pub mod util;

pub use config::Config;

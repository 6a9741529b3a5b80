mod actions;
mod core;
mod gesture;
#[cfg(test)]
mod tests;

pub use core::{Canvas, DrawingState};

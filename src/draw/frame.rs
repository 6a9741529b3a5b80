//! Ordered stroke container.

use super::stroke::Stroke;
use serde::{Deserialize, Serialize};

/// All sealed strokes of the current drawing.
///
/// Append-only apart from [`StrokeList::clear`]; index 0 is the bottom layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrokeList {
    strokes: Vec<Stroke>,
}

impl StrokeList {
    /// Creates a new empty list.
    pub const fn new() -> Self {
        Self {
            strokes: Vec::new(),
        }
    }

    /// Removes all strokes. Calling it on an empty list is a no-op.
    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    /// Appends a sealed stroke on top of the existing ones.
    pub fn push(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    /// Attempts to append, enforcing a maximum stroke count when `max` > 0.
    ///
    /// Returns `true` if the stroke was added, `false` if the limit would be exceeded.
    pub fn try_push(&mut self, stroke: Stroke, max: usize) -> bool {
        if max == 0 || self.strokes.len() < max {
            self.strokes.push(stroke);
            true
        } else {
            false
        }
    }

    /// Drops strokes beyond `max` (the newest ones).
    pub(crate) fn truncate(&mut self, max: usize) {
        self.strokes.truncate(max);
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Stroke> {
        self.strokes.iter()
    }
}

impl<'a> IntoIterator for &'a StrokeList {
    type Item = &'a Stroke;
    type IntoIter = std::slice::Iter<'a, Stroke>;

    fn into_iter(self) -> Self::IntoIter {
        self.strokes.iter()
    }
}

impl FromIterator<Stroke> for StrokeList {
    fn from_iter<I: IntoIterator<Item = Stroke>>(iter: I) -> Self {
        Self {
            strokes: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{ActiveStroke, Point, StrokeStyle};

    fn dot(x: f64) -> Stroke {
        ActiveStroke::begin(Point::new(x, 0.0), StrokeStyle::Erase { width: 1.0 }).seal()
    }

    #[test]
    fn try_push_respects_limit() {
        let mut list = StrokeList::new();
        assert!(list.try_push(dot(0.0), 1));
        assert!(!list.try_push(dot(1.0), 1));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn zero_limit_means_unlimited() {
        let mut list = StrokeList::new();
        for i in 0..5 {
            assert!(list.try_push(dot(i as f64), 0));
        }
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn clear_twice_leaves_list_empty() {
        let mut list: StrokeList = [dot(0.0), dot(1.0)].into_iter().collect();
        list.clear();
        assert!(list.is_empty());
        list.clear();
        assert!(list.is_empty());
    }
}

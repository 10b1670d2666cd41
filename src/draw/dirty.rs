//! Dirty region tracking for incremental rendering.
//!
//! Collects axis-aligned rectangles that need repainting between frames.

use super::{Shape, StrokeStyle};
use crate::util::Rect;

/// Tracks dirty rectangles accumulated between renders.
#[derive(Debug, Default)]
pub struct DirtyTracker {
    regions: Vec<Rect>,
    force_full: bool,
}

impl DirtyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the entire surface as dirty. Clears any accumulated rectangles.
    pub fn mark_full(&mut self) {
        self.force_full = true;
        self.regions.clear();
    }

    /// Adds a dirty rectangle if the tracker is not already full.
    pub fn mark_rect(&mut self, rect: Rect) {
        if !rect.is_valid() || self.force_full {
            return;
        }
        self.regions.push(rect);
    }

    pub fn mark_optional_rect(&mut self, rect: Option<Rect>) {
        if let Some(rect) = rect {
            self.mark_rect(rect);
        }
    }

    /// Adds the bounding box for the given shape, or full damage if none is available.
    pub fn mark_shape(&mut self, shape: &Shape, style: &StrokeStyle) {
        match shape.bounding_box(style) {
            Some(rect) => self.mark_rect(rect),
            None => self.mark_full(),
        }
    }

    /// Returns true when nothing has been marked since the last drain.
    pub fn is_clean(&self) -> bool {
        !self.force_full && self.regions.is_empty()
    }

    /// Drains the dirty regions gathered so far.
    ///
    /// When the full surface is marked, returns a single rectangle covering the
    /// entire surface; otherwise returns accumulated rectangles.
    pub fn take_regions(&mut self, width: i32, height: i32) -> Vec<Rect> {
        if self.force_full {
            self.force_full = false;
            self.regions.clear();
            Rect::new(0, 0, width, height).into_iter().collect()
        } else {
            self.regions.drain(..).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Point;

    #[test]
    fn mark_shape_records_rectangles() {
        let mut tracker = DirtyTracker::new();
        tracker.mark_shape(
            &Shape::Arrow {
                start: Point::new(0.0, 0.0),
                end: Point::new(100.0, 100.0),
            },
            &StrokeStyle::default(),
        );

        let rects = tracker.take_regions(200, 200);
        assert_eq!(rects.len(), 1);
        assert!(rects[0].is_valid());
        assert!(tracker.is_clean());
    }

    #[test]
    fn mark_full_takes_precedence() {
        let style = StrokeStyle::default();
        let mut tracker = DirtyTracker::new();
        tracker.mark_shape(
            &Shape::Rectangle {
                start: Point::new(5.0, 5.0),
                end: Point::new(15.0, 15.0),
            },
            &style,
        );
        tracker.mark_full();
        tracker.mark_shape(
            &Shape::Rectangle {
                start: Point::new(20.0, 20.0),
                end: Point::new(35.0, 35.0),
            },
            &style,
        );

        let rects = tracker.take_regions(200, 100);
        assert_eq!(rects, vec![Rect::new(0, 0, 200, 100).unwrap()]);
    }

    #[test]
    fn empty_freehand_forces_full_damage() {
        let mut tracker = DirtyTracker::new();
        tracker.mark_shape(&Shape::Freehand { points: Vec::new() }, &StrokeStyle::default());
        assert_eq!(tracker.take_regions(10, 10).len(), 1);
        assert!(tracker.take_regions(10, 10).is_empty());
    }
}

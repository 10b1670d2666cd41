//! Drag tracking for floating toolbar windows.

use super::position::{WindowDelta, WindowPosition};
use crate::draw::Point;

/// Free-form window drag: the window follows the pointer from the first move.
///
/// Captures the window offset and the touch point at press; each move places
/// the window at `origin + delta(touch)`.
#[derive(Debug, Clone, Copy)]
pub struct WindowDrag {
    origin: WindowPosition,
    touch_origin: Point,
}

impl WindowDrag {
    pub fn begin(origin: WindowPosition, touch: Point) -> Self {
        Self {
            origin,
            touch_origin: touch,
        }
    }

    /// Raw touch displacement since the press.
    pub fn touch_delta(&self, touch: Point) -> (f64, f64) {
        (touch.x - self.touch_origin.x, touch.y - self.touch_origin.y)
    }

    /// Window position for the given touch point.
    pub fn position_for(&self, touch: Point) -> WindowPosition {
        let (dx, dy) = self.touch_delta(touch);
        self.origin.offset(WindowDelta::from_touch_delta(dx, dy))
    }
}

/// Drag-or-tap tracking for the small restore button.
///
/// A gesture becomes a drag once the pointer has moved at least `threshold`
/// pixels from the press point along either axis, and stays a drag until
/// release. A release that never became a drag is a tap.
#[derive(Debug, Clone, Copy)]
pub struct RestoreDrag {
    drag: WindowDrag,
    threshold: f64,
    dragging: bool,
}

impl RestoreDrag {
    pub fn begin(origin: WindowPosition, touch: Point, threshold: f64) -> Self {
        Self {
            drag: WindowDrag::begin(origin, touch),
            threshold,
            dragging: false,
        }
    }

    /// Feeds a move; returns the new window position once the gesture is a drag.
    pub fn update(&mut self, touch: Point) -> Option<WindowPosition> {
        let (dx, dy) = self.drag.touch_delta(touch);
        if dx.abs() >= self.threshold || dy.abs() >= self.threshold {
            self.dragging = true;
        }
        self.dragging.then(|| self.drag.position_for(touch))
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}

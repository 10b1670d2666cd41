//! Window placement coordinates and the touch-to-window delta conversion.

use serde::{Deserialize, Serialize};

/// Position of a floating window as understood by the window host.
///
/// Toolbar windows are anchored to the bottom-start corner of the screen, so
/// `x` grows to the right and `y` grows *upwards* from the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowPosition {
    pub x: i32,
    pub y: i32,
}

impl WindowPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, delta: WindowDelta) -> Self {
        Self {
            x: self.x.saturating_add(delta.dx),
            y: self.y.saturating_add(delta.dy),
        }
    }
}

/// Displacement in window-placement coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowDelta {
    pub dx: i32,
    pub dy: i32,
}

impl WindowDelta {
    /// Converts a raw touch displacement into a window-placement displacement.
    ///
    /// Touch coordinates grow downwards while bottom-anchored window offsets
    /// grow upwards, so the vertical component changes sign. Fractional pixels
    /// are truncated toward zero.
    pub fn from_touch_delta(dx: f64, dy: f64) -> Self {
        Self {
            dx: dx as i32,
            dy: (dy as i32).saturating_neg(),
        }
    }
}

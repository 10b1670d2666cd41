//! Pointer event types delivered by the window host.

use crate::draw::Point;
use serde::{Deserialize, Serialize};

/// Phase of a single-pointer contact.
///
/// A host delivers a strictly ordered `Press -> Move* -> Release` sequence per contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PointerAction {
    Press,
    Move,
    Release,
}

/// A pointer event in the coordinate space of the receiving window.
///
/// Drawing surfaces receive surface-local coordinates; toolbar drag handles
/// receive raw screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub action: PointerAction,
    pub x: f64,
    pub y: f64,
}

impl PointerEvent {
    pub const fn new(action: PointerAction, x: f64, y: f64) -> Self {
        Self { action, x, y }
    }

    pub const fn press(x: f64, y: f64) -> Self {
        Self::new(PointerAction::Press, x, y)
    }

    pub const fn moved(x: f64, y: f64) -> Self {
        Self::new(PointerAction::Move, x, y)
    }

    pub const fn release(x: f64, y: f64) -> Self {
        Self::new(PointerAction::Release, x, y)
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

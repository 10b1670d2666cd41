//! Window descriptions exchanged with the window host.

use crate::toolbar::WindowPosition;
use serde::Serialize;
use std::fmt;

/// The overlay windows a session manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WindowRole {
    /// Full-screen drawing surface
    Surface,
    /// Floating tool buttons and drag handle
    Toolbar,
    /// Small draggable button shown while the toolbar is hidden
    RestoreButton,
}

impl fmt::Display for WindowRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WindowRole::Surface => "surface",
            WindowRole::Toolbar => "toolbar",
            WindowRole::RestoreButton => "restore button",
        };
        f.write_str(name)
    }
}

/// Whether a window receives pointer events or lets them fall through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TouchMode {
    AcceptTouches,
    IgnoreTouches,
}

/// Width or height request for a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WindowExtent {
    /// Fill the screen along this axis
    MatchParent,
    /// Size to the window's own content
    WrapContent,
}

/// Screen corner the window position is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    Fill,
    BottomStart,
}

/// Placement and input flags for one overlay window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WindowSpec {
    pub x: i32,
    pub y: i32,
    pub width: WindowExtent,
    pub height: WindowExtent,
    pub anchor: Anchor,
    pub touch: TouchMode,
}

impl WindowSpec {
    /// Full-screen drawing surface. Touches start ignored until a tool is picked.
    pub fn surface() -> Self {
        Self {
            x: 0,
            y: 0,
            width: WindowExtent::MatchParent,
            height: WindowExtent::MatchParent,
            anchor: Anchor::Fill,
            touch: TouchMode::IgnoreTouches,
        }
    }

    /// Wrap-content floating window anchored bottom-start at `position`.
    pub fn floating(position: WindowPosition) -> Self {
        Self {
            x: position.x,
            y: position.y,
            width: WindowExtent::WrapContent,
            height: WindowExtent::WrapContent,
            anchor: Anchor::BottomStart,
            touch: TouchMode::AcceptTouches,
        }
    }

    pub fn position(&self) -> WindowPosition {
        WindowPosition::new(self.x, self.y)
    }

    pub fn at(self, position: WindowPosition) -> Self {
        Self {
            x: position.x,
            y: position.y,
            ..self
        }
    }

    pub fn with_touch(self, touch: TouchMode) -> Self {
        Self { touch, ..self }
    }
}

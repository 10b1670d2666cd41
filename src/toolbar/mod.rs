//! Floating toolbar: tool selection, hide/restore and window dragging.

pub mod controller;
pub mod drag;
pub mod position;

pub use controller::{Tool, ToolbarButton, ToolbarController, ToolbarEffect, ToolbarVisibility};
pub use drag::{RestoreDrag, WindowDrag};
pub use position::{WindowDelta, WindowPosition};

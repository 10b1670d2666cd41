//! Input event types and drawing mode selection.
//!
//! Hosts translate their native touch/mouse events into [`PointerEvent`]s and
//! route them to the drawing surface or the toolbar.

pub mod events;
pub mod mode;

pub use events::{PointerAction, PointerEvent};
pub use mode::DrawingMode;

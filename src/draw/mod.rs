//! Rendering primitives, shape definitions and the drawing surface (Cairo-based).
//!
//! This module defines the core drawing types used for screen annotation:
//! - [`Shape`]: the closed set of annotation kinds (arrow, rectangle, freehand)
//! - [`StrokeStyle`]: paint parameters shared by every shape on a surface
//! - [`DrawingSurface`]: shape list plus the pointer gesture state machine
//! - Rendering functions for Cairo-based output

pub mod color;
pub mod dirty;
pub mod render;
pub mod shape;
pub mod style;
pub mod surface;

pub use color::Color;
pub use dirty::DirtyTracker;
pub use render::{clear_transparent, render_freehand_borrowed, render_shape, render_shapes};
pub use shape::{Point, Shape};
pub use style::StrokeStyle;
pub use surface::DrawingSurface;

#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};

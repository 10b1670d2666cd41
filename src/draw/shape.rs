//! Shape definitions for screen annotations.

use super::style::StrokeStyle;
use crate::util::{self, Rect};
use serde::{Deserialize, Serialize};

/// A coordinate in surface-local pixel space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Represents a drawable annotation on the overlay.
///
/// Shapes are plain values: appearance comes from the [`StrokeStyle`] of the
/// surface that renders them, and renderers dispatch with an exhaustive match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Straight shaft from `start` with a filled arrowhead at `end`
    Arrow { start: Point, end: Point },
    /// Axis-aligned outline spanned by two raw corner points
    ///
    /// The corners are stored exactly as pressed/released; min/max
    /// normalization happens at render time.
    Rectangle { start: Point, end: Point },
    /// Polyline through every recorded pointer position, in order
    Freehand { points: Vec<Point> },
}

impl Shape {
    /// Returns the axis-aligned bounding box for this shape, expanded to cover the stroke.
    ///
    /// The returned rectangle is suitable for dirty region tracking.
    /// Returns `None` only for a freehand path with no points.
    pub fn bounding_box(&self, style: &StrokeStyle) -> Option<Rect> {
        match self {
            Shape::Arrow { start, end } => bounding_box_for_arrow(*start, *end, style),
            Shape::Rectangle { start, end } => {
                bounding_box_for_points(&[*start, *end], style.shape_thickness)
            }
            Shape::Freehand { points } => {
                bounding_box_for_points(points, style.freehand_thickness)
            }
        }
    }
}

fn stroke_padding(thick: f64) -> f64 {
    (thick / 2.0).ceil().max(1.0)
}

pub(crate) fn bounding_box_for_points(points: &[Point], thick: f64) -> Option<Rect> {
    let (first, rest) = points.split_first()?;
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);

    for p in rest {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }

    let padding = stroke_padding(thick);
    Rect::covering(
        min_x - padding,
        min_y - padding,
        max_x + padding,
        max_y + padding,
    )
}

pub(crate) fn bounding_box_for_arrow(start: Point, end: Point, style: &StrokeStyle) -> Option<Rect> {
    let [left, right] =
        util::arrowhead_points(start, end, style.arrow_length, style.arrow_angle);
    // The arrowhead is stroked as well as filled, so it grows by the same padding.
    bounding_box_for_points(&[start, end, left, right], style.shape_thickness)
}

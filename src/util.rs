//! Utility functions for colors and geometry.
//!
//! This module provides:
//! - Arrowhead geometry calculations
//! - Rectangle corner normalization
//! - Color name mapping used by the configuration file
//! - The integer [`Rect`] used for damage tracking

use crate::draw::{Color, Point, color::*};

// ============================================================================
// Arrowhead Geometry
// ============================================================================

/// Calculates the two back points of a triangular arrowhead.
///
/// The arrowhead apex sits at `end`. With the shaft direction
/// `θ = atan2(end.y - start.y, end.x - start.x)`, each back point lies at
/// `length` from `end`, rotated `θ ∓ angle_degrees` away from the shaft.
///
/// A zero-length shaft yields `θ = 0`, so the head still renders (pointing
/// along +x) instead of disappearing.
///
/// # Arguments
/// * `start` - Arrow tail
/// * `end` - Arrow tip (arrowhead apex)
/// * `length` - Distance from the apex to each back point in pixels
/// * `angle_degrees` - Angle between each arrowhead edge and the shaft
///
/// # Returns
/// `[first, second]` back points; `first` uses `θ - angle`, `second` uses `θ + angle`.
pub fn arrowhead_points(start: Point, end: Point, length: f64, angle_degrees: f64) -> [Point; 2] {
    let theta = (end.y - start.y).atan2(end.x - start.x);
    let spread = angle_degrees.to_radians();

    let back = |angle: f64| Point {
        x: end.x - length * angle.cos(),
        y: end.y - length * angle.sin(),
    };

    [back(theta - spread), back(theta + spread)]
}

/// Rectangle bounds normalized from two raw corner points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectBounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl RectBounds {
    /// Normalizes a press/release corner pair so that `left <= right` and `top <= bottom`.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            left: a.x.min(b.x),
            top: a.y.min(b.y),
            right: a.x.max(b.x),
            bottom: a.y.max(b.y),
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Largest magnitude [`Rect::covering`] keeps for a float bound.
const COORD_LIMIT: f64 = (i32::MAX / 4) as f64;

/// Axis-aligned rectangle helper used for dirty region tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds a rectangle from min/max bounds (inclusive min, exclusive max).
    pub fn from_min_max(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Self> {
        Self::new(
            min_x,
            min_y,
            max_x.saturating_sub(min_x),
            max_y.saturating_sub(min_y),
        )
    }

    /// Builds the smallest integer rectangle covering the given float bounds.
    ///
    /// Degenerate spans are widened to one pixel so a zero-area shape still
    /// produces damage. Bounds are clamped to `±COORD_LIMIT`, so any finite or
    /// infinite input yields a rectangle whose edges fit in `i32`.
    pub fn covering(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Option<Self> {
        let bound = |v: f64| v.clamp(-COORD_LIMIT, COORD_LIMIT) as i32;
        let min_x = bound(min_x.floor());
        let min_y = bound(min_y.floor());
        let mut max_x = bound(max_x.ceil());
        let mut max_y = bound(max_y.ceil());
        if max_x == min_x {
            max_x += 1;
        }
        if max_y == min_y {
            max_y += 1;
        }
        Self::from_min_max(min_x, min_y, max_x, max_y)
    }

    /// Returns true if rectangle has a positive area.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

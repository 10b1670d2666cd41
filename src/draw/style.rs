//! Stroke parameters shared by every shape on a surface.

use super::color::{Color, RED};
use crate::config::Config;

/// Paint settings for the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke and fill color for every shape
    pub color: Color,
    /// Line width for arrow shafts, arrowheads and rectangle outlines
    pub shape_thickness: f64,
    /// Line width for freehand paths (thinner than the other shapes)
    pub freehand_thickness: f64,
    /// Distance from the arrow tip to each arrowhead back point
    pub arrow_length: f64,
    /// Angle between each arrowhead edge and the shaft, in degrees
    pub arrow_angle: f64,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: RED,
            shape_thickness: 6.0,
            freehand_thickness: 3.0,
            arrow_length: 40.0,
            arrow_angle: 30.0,
        }
    }
}

impl StrokeStyle {
    pub fn from_config(config: &Config) -> Self {
        Self {
            color: config.drawing.color.to_color(),
            shape_thickness: config.drawing.shape_thickness,
            freehand_thickness: config.drawing.freehand_thickness,
            arrow_length: config.arrow.length,
            arrow_angle: config.arrow.angle_degrees,
        }
    }
}

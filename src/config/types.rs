//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Stroke appearance for every shape drawn on the overlay.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Stroke color - either a named color (red, green, blue, yellow, orange, pink, white, black)
    /// or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub color: ColorSpec,

    /// Line width for arrows and rectangles in pixels (valid range: 1.0 - 30.0)
    #[serde(default = "default_shape_thickness")]
    pub shape_thickness: f64,

    /// Line width for freehand strokes in pixels (valid range: 1.0 - 30.0)
    #[serde(default = "default_freehand_thickness")]
    pub freehand_thickness: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            shape_thickness: default_shape_thickness(),
            freehand_thickness: default_freehand_thickness(),
        }
    }
}

/// Arrowhead geometry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ArrowConfig {
    /// Distance from the tip to each back point of the head (valid range: 5.0 - 120.0)
    #[serde(default = "default_arrow_length")]
    pub length: f64,

    /// Angle between each head edge and the shaft in degrees (valid range: 10.0 - 80.0)
    #[serde(default = "default_arrow_angle")]
    pub angle_degrees: f64,
}

impl Default for ArrowConfig {
    fn default() -> Self {
        Self {
            length: default_arrow_length(),
            angle_degrees: default_arrow_angle(),
        }
    }
}

/// Floating toolbar behavior.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ToolbarConfig {
    /// Initial horizontal offset from the left screen edge
    #[serde(default = "default_toolbar_x")]
    pub initial_x: i32,

    /// Initial vertical offset from the bottom screen edge
    #[serde(default = "default_toolbar_y")]
    pub initial_y: i32,

    /// Opacity of tool buttons that are not the active tool (valid range: 0.1 - 1.0)
    #[serde(default = "default_inactive_alpha")]
    pub inactive_alpha: f64,

    /// Pointer travel in pixels before the restore button starts dragging
    /// instead of registering a tap (valid range: 1.0 - 100.0)
    #[serde(default = "default_restore_drag_threshold")]
    pub restore_drag_threshold: f64,
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        Self {
            initial_x: default_toolbar_x(),
            initial_y: default_toolbar_y(),
            inactive_alpha: default_inactive_alpha(),
            restore_drag_threshold: default_restore_drag_threshold(),
        }
    }
}

/// Drawing surface bounds used for snapshots when the host does not report its own.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SurfaceConfig {
    /// Surface width in pixels (valid range: 1 - 16384)
    #[serde(default = "default_surface_width")]
    pub width: i32,

    /// Surface height in pixels (valid range: 1 - 16384)
    #[serde(default = "default_surface_height")]
    pub height: i32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: default_surface_width(),
            height: default_surface_height(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("red".to_string())
}

fn default_shape_thickness() -> f64 {
    6.0
}

fn default_freehand_thickness() -> f64 {
    3.0
}

fn default_arrow_length() -> f64 {
    40.0
}

fn default_arrow_angle() -> f64 {
    30.0
}

fn default_toolbar_x() -> i32 {
    20
}

fn default_toolbar_y() -> i32 {
    200
}

fn default_inactive_alpha() -> f64 {
    0.5
}

fn default_restore_drag_threshold() -> f64 {
    10.0
}

fn default_surface_width() -> i32 {
    1080
}

fn default_surface_height() -> i32 {
    1920
}

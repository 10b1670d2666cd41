//! Drawing mode selection.

use serde::{Deserialize, Serialize};

/// Which kind of shape a pointer gesture on the surface creates.
///
/// Exactly one mode is active at a time. With [`DrawingMode::None`] the
/// surface declines pointer events so the content underneath receives them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DrawingMode {
    #[default]
    None,
    Arrow,
    Rectangle,
    Freehand,
}

impl DrawingMode {
    pub fn is_drawing(self) -> bool {
        self != DrawingMode::None
    }
}

//! Toolbar button state, hide/show behavior and window dragging.

use super::drag::{RestoreDrag, WindowDrag};
use super::position::WindowPosition;
use crate::config::ToolbarConfig;
use crate::input::{DrawingMode, PointerAction, PointerEvent};
use crate::overlay::{Notice, TouchMode};
use log::debug;
use serde::{Deserialize, Serialize};

/// Drawing tools offered on the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tool {
    Arrow,
    Rectangle,
    Freehand,
}

impl Tool {
    pub const ALL: [Tool; 3] = [Tool::Arrow, Tool::Rectangle, Tool::Freehand];

    pub fn mode(self) -> DrawingMode {
        match self {
            Tool::Arrow => DrawingMode::Arrow,
            Tool::Rectangle => DrawingMode::Rectangle,
            Tool::Freehand => DrawingMode::Freehand,
        }
    }
}

/// Every button on the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolbarButton {
    Tool(Tool),
    /// Hide the toolbar and let touches reach the content underneath
    Hide,
    /// Erase every drawing
    Clear,
    /// Stop the overlay
    Close,
}

/// Side effects the overlay session applies after a toolbar interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarEffect {
    SetMode(DrawingMode),
    SetSurfaceTouch(TouchMode),
    SetToolbarVisible(bool),
    SetRestoreVisible(bool),
    MoveToolbar(WindowPosition),
    MoveRestoreButton(WindowPosition),
    ClearDrawings,
    CloseOverlay,
    Notify(Notice),
}

/// Whether the toolbar or its restore button is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarVisibility {
    Shown,
    /// `passthrough` is true when the user hid the toolbar explicitly and the
    /// surface stopped accepting touches.
    Hidden { passthrough: bool },
}

/// Tracks toolbar state and converts user interactions into [`ToolbarEffect`]s.
///
/// The controller owns no windows and no surface; it only decides what should
/// happen, which keeps it independent from the host.
#[derive(Debug)]
pub struct ToolbarController {
    settings: ToolbarConfig,
    active_tool: Option<Tool>,
    visibility: ToolbarVisibility,
    toolbar_position: WindowPosition,
    restore_position: WindowPosition,
    handle_drag: Option<WindowDrag>,
    restore_drag: Option<RestoreDrag>,
}

impl ToolbarController {
    pub fn new(settings: ToolbarConfig) -> Self {
        let start = WindowPosition::new(settings.initial_x, settings.initial_y);
        Self {
            settings,
            active_tool: None,
            visibility: ToolbarVisibility::Shown,
            toolbar_position: start,
            restore_position: start,
            handle_drag: None,
            restore_drag: None,
        }
    }

    pub fn active_tool(&self) -> Option<Tool> {
        self.active_tool
    }

    pub fn visibility(&self) -> ToolbarVisibility {
        self.visibility
    }

    pub fn toolbar_position(&self) -> WindowPosition {
        self.toolbar_position
    }

    pub fn restore_position(&self) -> WindowPosition {
        self.restore_position
    }

    /// Opacity for a tool button: full for the active tool (or for every tool
    /// before one is picked), reduced for the others.
    pub fn button_alpha(&self, tool: Tool) -> f64 {
        match self.active_tool {
            Some(active) if active != tool => self.settings.inactive_alpha,
            _ => 1.0,
        }
    }

    pub fn press_button(&mut self, button: ToolbarButton) -> Vec<ToolbarEffect> {
        debug!("Toolbar button {:?}", button);
        match button {
            ToolbarButton::Tool(tool) => self.select_tool(tool),
            ToolbarButton::Hide => self.hide(true),
            ToolbarButton::Clear => vec![ToolbarEffect::ClearDrawings],
            ToolbarButton::Close => vec![ToolbarEffect::CloseOverlay],
        }
    }

    /// Picking a tool enables drawing and tucks the toolbar away.
    ///
    /// Unlike the hide button, the surface keeps accepting touches and no
    /// notice is shown.
    fn select_tool(&mut self, tool: Tool) -> Vec<ToolbarEffect> {
        self.active_tool = Some(tool);
        let mut effects = vec![
            ToolbarEffect::SetMode(tool.mode()),
            ToolbarEffect::SetSurfaceTouch(TouchMode::AcceptTouches),
        ];
        effects.extend(self.hide(false));
        effects
    }

    fn hide(&mut self, passthrough: bool) -> Vec<ToolbarEffect> {
        self.visibility = ToolbarVisibility::Hidden { passthrough };
        self.handle_drag = None;
        self.restore_position = self.toolbar_position;

        let mut effects = vec![ToolbarEffect::SetToolbarVisible(false)];
        if passthrough {
            effects.push(ToolbarEffect::SetSurfaceTouch(TouchMode::IgnoreTouches));
        }
        effects.push(ToolbarEffect::MoveRestoreButton(self.restore_position));
        effects.push(ToolbarEffect::SetRestoreVisible(true));
        if passthrough {
            effects.push(ToolbarEffect::Notify(Notice::ToolbarHidden));
        }
        effects
    }

    fn show(&mut self) -> Vec<ToolbarEffect> {
        self.visibility = ToolbarVisibility::Shown;

        let mut effects = vec![
            ToolbarEffect::SetToolbarVisible(true),
            ToolbarEffect::SetRestoreVisible(false),
        ];
        if self.active_tool.is_some() {
            effects.push(ToolbarEffect::SetSurfaceTouch(TouchMode::AcceptTouches));
        }
        effects
    }

    /// Pointer events on the toolbar's drag handle, in raw screen coordinates.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Vec<ToolbarEffect> {
        match event.action {
            PointerAction::Press => {
                self.handle_drag = Some(WindowDrag::begin(self.toolbar_position, event.point()));
                Vec::new()
            }
            PointerAction::Move => match self.handle_drag {
                Some(drag) => {
                    self.toolbar_position = drag.position_for(event.point());
                    vec![ToolbarEffect::MoveToolbar(self.toolbar_position)]
                }
                None => Vec::new(),
            },
            PointerAction::Release => {
                self.handle_drag = None;
                Vec::new()
            }
        }
    }

    /// Pointer events on the restore button, in raw screen coordinates.
    ///
    /// Moves past the drag threshold reposition the button; a release that
    /// never became a drag shows the toolbar again.
    pub fn restore_pointer(&mut self, event: PointerEvent) -> Vec<ToolbarEffect> {
        match event.action {
            PointerAction::Press => {
                self.restore_drag = Some(RestoreDrag::begin(
                    self.restore_position,
                    event.point(),
                    self.settings.restore_drag_threshold,
                ));
                Vec::new()
            }
            PointerAction::Move => {
                let moved = self
                    .restore_drag
                    .as_mut()
                    .and_then(|drag| drag.update(event.point()));
                match moved {
                    Some(position) => {
                        self.restore_position = position;
                        vec![ToolbarEffect::MoveRestoreButton(position)]
                    }
                    None => Vec::new(),
                }
            }
            PointerAction::Release => match self.restore_drag.take() {
                Some(drag) if !drag.is_dragging() => self.show(),
                _ => Vec::new(),
            },
        }
    }
}

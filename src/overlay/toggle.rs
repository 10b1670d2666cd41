//! Quick on/off affordance driven by the shared run state.

use super::host::{Notifier, PermissionGate};
use super::notice::Notice;
use super::run_state::RunState;

/// What the owner of a quick toggle should do after a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    Start,
    Stop,
    /// The user was told to grant the overlay permission; nothing else happens
    PermissionRequired,
}

/// Displayed state of the toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileState {
    pub active: bool,
    pub label: &'static str,
}

/// A quick-settings style switch for the overlay.
///
/// Reads the run state but never writes it; starting and stopping the session
/// is left to the owner.
#[derive(Debug, Clone)]
pub struct QuickToggle {
    run_state: RunState,
}

impl QuickToggle {
    pub fn new(run_state: RunState) -> Self {
        Self { run_state }
    }

    pub fn click(&self, gate: &dyn PermissionGate, notifier: &dyn Notifier) -> ToggleAction {
        if !gate.can_draw_overlays() {
            notifier.notify(Notice::PermissionRequired);
            gate.request_permission();
            return ToggleAction::PermissionRequired;
        }

        if self.run_state.is_active() {
            ToggleAction::Stop
        } else {
            ToggleAction::Start
        }
    }

    pub fn tile_state(&self) -> TileState {
        if self.run_state.is_active() {
            TileState {
                active: true,
                label: "Annotating",
            }
        } else {
            TileState {
                active: false,
                label: "Annotate screen",
            }
        }
    }
}

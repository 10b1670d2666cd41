//! Contracts for the platform-owned collaborators of an overlay session.

use super::notice::Notice;
use super::window::{WindowRole, WindowSpec};
use thiserror::Error;

/// Errors reported by a window host.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("{0} window is not attached")]
    NotAttached(WindowRole),

    #[error("{0} window is already attached")]
    AlreadyAttached(WindowRole),

    #[error("window host rejected the request: {0}")]
    Rejected(String),
}

/// Places overlay windows above all other content and delivers their input.
///
/// The host must deliver a strictly ordered `Press -> Move* -> Release`
/// sequence per contact and call the surface's render routine whenever it
/// decides to repaint.
pub trait WindowHost {
    fn add_window(&mut self, role: WindowRole, spec: WindowSpec) -> Result<(), HostError>;

    /// Applies a new position or touch mode to an attached window.
    fn update_window(&mut self, role: WindowRole, spec: WindowSpec) -> Result<(), HostError>;

    fn set_visible(&mut self, role: WindowRole, visible: bool) -> Result<(), HostError>;

    fn remove_window(&mut self, role: WindowRole) -> Result<(), HostError>;
}

/// Reports whether the environment allows drawing overlay windows.
pub trait PermissionGate {
    fn can_draw_overlays(&self) -> bool;

    /// Sends the user to wherever the capability can be granted.
    ///
    /// Never retried automatically; granting requires explicit user action.
    fn request_permission(&self);
}

/// Shows short, one-shot notices to the user.
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// A permission gate with a fixed answer.
#[derive(Debug, Clone, Copy)]
pub struct StaticPermission(pub bool);

impl PermissionGate for StaticPermission {
    fn can_draw_overlays(&self) -> bool {
        self.0
    }

    fn request_permission(&self) {
        log::info!("Overlay permission must be granted in the system settings");
    }
}

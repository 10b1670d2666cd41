//! Overlay lifecycle and the boundary with the platform window host.
//!
//! The platform supplies three collaborators, expressed here as traits:
//! a [`WindowHost`] that places windows and delivers input, a
//! [`PermissionGate`] for the overlay capability, and a [`Notifier`] for
//! one-shot notices. An [`OverlaySession`] ties them to a drawing surface and a
//! toolbar; [`RunState`] publishes whether a session is alive.

pub mod headless;
pub mod host;
pub mod notice;
pub mod run_state;
pub mod session;
pub mod toggle;
pub mod window;

pub use headless::{HeadlessHost, HeadlessWindow};
pub use host::{HostError, Notifier, PermissionGate, StaticPermission, WindowHost};
pub use notice::{LogNotifier, Notice};
pub use run_state::RunState;
pub use session::{OverlayError, OverlaySession};
pub use toggle::{QuickToggle, TileState, ToggleAction};
pub use window::{Anchor, TouchMode, WindowExtent, WindowRole, WindowSpec};

#[cfg(test)]
mod tests;

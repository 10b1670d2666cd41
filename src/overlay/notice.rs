//! User-facing notices.

use super::host::Notifier;
use log::{info, warn};

/// One-shot messages surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The overlay capability is missing; the user must grant it
    PermissionRequired,
    /// The toolbar was hidden and the surface now lets touches through
    ToolbarHidden,
}

impl Notice {
    pub fn summary(&self) -> &'static str {
        match self {
            Notice::PermissionRequired => "Overlay permission required",
            Notice::ToolbarHidden => "Toolbar hidden",
        }
    }

    pub fn body(&self) -> &'static str {
        match self {
            Notice::PermissionRequired => {
                "Allow drawing over other apps, then start the overlay again."
            }
            Notice::ToolbarHidden => {
                "Drawings stay visible. Tap the restore button to keep drawing."
            }
        }
    }
}

/// Writes notices to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        match notice {
            Notice::PermissionRequired => warn!("{}: {}", notice.summary(), notice.body()),
            Notice::ToolbarHidden => info!("{}: {}", notice.summary(), notice.body()),
        }
    }
}

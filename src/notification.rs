//! Desktop notices via freedesktop D-Bus.

use crate::overlay::{Notice, Notifier};
use std::collections::HashMap;
use std::time::Duration;
use zbus::{Connection, proxy};

const NOTIFY_TIMEOUT: Duration = Duration::from_secs(2);

/// D-Bus interface for freedesktop Notifications.
#[proxy(
    interface = "org.freedesktop.Notifications",
    default_service = "org.freedesktop.Notifications",
    default_path = "/org/freedesktop/Notifications"
)]
trait Notifications {
    /// Send a notification; returns its ID.
    #[allow(clippy::too_many_arguments)]
    fn notify(
        &self,
        app_name: &str,
        replaces_id: u32,
        app_icon: &str,
        summary: &str,
        body: &str,
        actions: Vec<&str>,
        hints: HashMap<&str, zbus::zvariant::Value<'_>>,
        expire_timeout: i32,
    ) -> zbus::Result<u32>;
}

/// Send a system notification.
pub async fn send_notification(summary: &str, body: &str, icon: &str) -> Result<(), String> {
    let connection = Connection::session()
        .await
        .map_err(|e| format!("Failed to connect to session bus: {}", e))?;

    let proxy = NotificationsProxy::new(&connection)
        .await
        .map_err(|e| format!("Failed to create notifications proxy: {}", e))?;

    proxy
        .notify(
            "Overmark",
            0,
            icon,
            summary,
            body,
            vec![],
            HashMap::new(),
            3000,
        )
        .await
        .map_err(|e| format!("Failed to send notification: {}", e))?;

    Ok(())
}

/// Delivers [`Notice`]s as desktop notifications.
///
/// Each notice blocks for at most two seconds; delivery failures are logged
/// and otherwise ignored.
pub struct DesktopNotifier {
    runtime: tokio::runtime::Runtime,
}

impl DesktopNotifier {
    pub fn new() -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;
        Ok(Self { runtime })
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, notice: Notice) {
        let icon = match notice {
            Notice::PermissionRequired => "dialog-warning",
            Notice::ToolbarHidden => "applications-graphics",
        };

        let result = self.runtime.block_on(async {
            tokio::time::timeout(
                NOTIFY_TIMEOUT,
                send_notification(notice.summary(), notice.body(), icon),
            )
            .await
        });

        match result {
            Ok(Ok(())) => log::debug!("Sent notice: {}", notice.summary()),
            Ok(Err(e)) => log::warn!("{} ({})", e, notice.summary()),
            Err(_) => log::warn!("Timed out sending notice: {}", notice.summary()),
        }
    }
}

//! A live overlay: the drawing surface, the toolbar and their host windows.

use super::host::{HostError, Notifier, PermissionGate, WindowHost};
use super::notice::Notice;
use super::run_state::{RunGuard, RunState};
use super::window::{TouchMode, WindowRole, WindowSpec};
use crate::config::Config;
use crate::draw::{DrawingSurface, StrokeStyle};
use crate::input::PointerEvent;
use crate::toolbar::{ToolbarButton, ToolbarController, ToolbarEffect};
use crate::util::Rect;
use log::{debug, info, warn};
use thiserror::Error;

/// Reasons an overlay session cannot start.
#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("overlay permission has not been granted")]
    PermissionDenied,

    #[error("an overlay session is already running")]
    AlreadyRunning,

    #[error("failed to attach {role} window: {source}")]
    Attach {
        role: WindowRole,
        #[source]
        source: HostError,
    },
}

const ROLES: [WindowRole; 3] = [
    WindowRole::Surface,
    WindowRole::Toolbar,
    WindowRole::RestoreButton,
];

/// Owns everything that exists while the overlay is on screen.
///
/// Created by [`OverlaySession::start`] and torn down by [`OverlaySession::stop`]
/// (or on drop). A stopped session cannot be restarted; start a new one.
pub struct OverlaySession<H: WindowHost> {
    host: H,
    surface: DrawingSurface,
    toolbar: ToolbarController,
    surface_spec: WindowSpec,
    toolbar_spec: WindowSpec,
    restore_spec: WindowSpec,
    close_requested: bool,
    attached: bool,
    _guard: RunGuard,
}

impl<H: WindowHost> OverlaySession<H> {
    /// Checks the permission gate, then attaches the overlay windows.
    ///
    /// The surface window starts out ignoring touches and the restore button
    /// starts hidden. The run state reads active for as long as the returned
    /// session lives.
    ///
    /// # Errors
    /// - [`OverlayError::PermissionDenied`] after notifying the user once and
    ///   asking the gate to prompt for the capability
    /// - [`OverlayError::AlreadyRunning`] if another session holds the run state
    /// - [`OverlayError::Attach`] if the host rejects a window; windows attached
    ///   so far are removed again
    pub fn start(
        mut host: H,
        config: &Config,
        gate: &dyn PermissionGate,
        notifier: &dyn Notifier,
        run_state: &RunState,
    ) -> Result<Self, OverlayError> {
        if !gate.can_draw_overlays() {
            notifier.notify(Notice::PermissionRequired);
            gate.request_permission();
            return Err(OverlayError::PermissionDenied);
        }

        let guard = run_state.claim().ok_or(OverlayError::AlreadyRunning)?;

        let toolbar = ToolbarController::new(config.toolbar.clone());
        let surface_spec = WindowSpec::surface();
        let toolbar_spec = WindowSpec::floating(toolbar.toolbar_position());
        let restore_spec = WindowSpec::floating(toolbar.restore_position());

        let specs = [
            (WindowRole::Surface, surface_spec),
            (WindowRole::Toolbar, toolbar_spec),
            (WindowRole::RestoreButton, restore_spec),
        ];
        for (index, (role, spec)) in specs.iter().enumerate() {
            if let Err(source) = host.add_window(*role, *spec) {
                for (attached, _) in &specs[..index] {
                    remove_logged(&mut host, *attached);
                }
                return Err(OverlayError::Attach {
                    role: *role,
                    source,
                });
            }
        }
        if let Err(err) = host.set_visible(WindowRole::RestoreButton, false) {
            warn!("Failed to hide restore button: {}", err);
        }

        let surface = DrawingSurface::new(
            StrokeStyle::from_config(config),
            config.surface.width,
            config.surface.height,
        );

        info!("Overlay started");
        Ok(Self {
            host,
            surface,
            toolbar,
            surface_spec,
            toolbar_spec,
            restore_spec,
            close_requested: false,
            attached: true,
            _guard: guard,
        })
    }

    pub fn surface(&self) -> &DrawingSurface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut DrawingSurface {
        &mut self.surface
    }

    pub fn toolbar(&self) -> &ToolbarController {
        &self.toolbar
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn surface_touch(&self) -> TouchMode {
        self.surface_spec.touch
    }

    /// True once the close button was pressed; the owner should call [`Self::stop`].
    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    /// Routes a pointer event that landed on the surface window.
    ///
    /// Returns `false` when the event should reach the content underneath:
    /// either the surface window ignores touches or no drawing mode is active.
    pub fn surface_pointer(&mut self, event: PointerEvent) -> bool {
        if self.surface_spec.touch == TouchMode::IgnoreTouches {
            return false;
        }
        self.surface.handle_pointer_event(event)
    }

    /// Routes a pointer event on the toolbar's drag handle (screen coordinates).
    pub fn handle_pointer(&mut self, event: PointerEvent, notifier: &dyn Notifier) {
        let effects = self.toolbar.handle_pointer(event);
        self.apply(effects, notifier);
    }

    /// Routes a pointer event on the restore button (screen coordinates).
    pub fn restore_pointer(&mut self, event: PointerEvent, notifier: &dyn Notifier) {
        let effects = self.toolbar.restore_pointer(event);
        self.apply(effects, notifier);
    }

    pub fn press_button(&mut self, button: ToolbarButton, notifier: &dyn Notifier) {
        let effects = self.toolbar.press_button(button);
        self.apply(effects, notifier);
    }

    /// Repaints the damaged parts of the surface into `ctx` if a repaint was requested.
    ///
    /// Returns the repainted regions so the host can damage only those areas of
    /// its buffer; empty when nothing was drawn.
    pub fn repaint(&mut self, ctx: &cairo::Context) -> Vec<Rect> {
        if !self.surface.take_repaint_request() || !self.surface.has_damage() {
            return Vec::new();
        }
        let damage = self.surface.take_damage();
        debug!("Repainting surface ({} damage regions)", damage.len());
        self.surface.render_regions(ctx, &damage);
        damage
    }

    fn apply(&mut self, effects: Vec<ToolbarEffect>, notifier: &dyn Notifier) {
        for effect in effects {
            match effect {
                ToolbarEffect::SetMode(mode) => self.surface.set_mode(mode),
                ToolbarEffect::SetSurfaceTouch(touch) => {
                    self.surface_spec = self.surface_spec.with_touch(touch);
                    self.update(WindowRole::Surface);
                }
                ToolbarEffect::SetToolbarVisible(visible) => {
                    self.set_visible(WindowRole::Toolbar, visible)
                }
                ToolbarEffect::SetRestoreVisible(visible) => {
                    self.set_visible(WindowRole::RestoreButton, visible)
                }
                ToolbarEffect::MoveToolbar(position) => {
                    self.toolbar_spec = self.toolbar_spec.at(position);
                    self.update(WindowRole::Toolbar);
                }
                ToolbarEffect::MoveRestoreButton(position) => {
                    self.restore_spec = self.restore_spec.at(position);
                    self.update(WindowRole::RestoreButton);
                }
                ToolbarEffect::ClearDrawings => self.surface.clear(),
                ToolbarEffect::CloseOverlay => self.close_requested = true,
                ToolbarEffect::Notify(notice) => notifier.notify(notice),
            }
        }
    }

    fn spec(&self, role: WindowRole) -> WindowSpec {
        match role {
            WindowRole::Surface => self.surface_spec,
            WindowRole::Toolbar => self.toolbar_spec,
            WindowRole::RestoreButton => self.restore_spec,
        }
    }

    fn update(&mut self, role: WindowRole) {
        let spec = self.spec(role);
        if let Err(err) = self.host.update_window(role, spec) {
            warn!("Failed to update {} window: {}", role, err);
        }
    }

    fn set_visible(&mut self, role: WindowRole, visible: bool) {
        if let Err(err) = self.host.set_visible(role, visible) {
            warn!("Failed to change {} visibility: {}", role, err);
        }
    }

    /// Removes every window and clears the run state.
    ///
    /// Removal failures are logged per window and never stop the teardown.
    /// Returns the host so callers can inspect or reuse it.
    pub fn stop(mut self) -> H
    where
        H: Default,
    {
        self.detach();
        std::mem::take(&mut self.host)
    }

    fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;
        for role in ROLES {
            remove_logged(&mut self.host, role);
        }
        info!("Overlay stopped");
    }
}

impl<H: WindowHost> Drop for OverlaySession<H> {
    fn drop(&mut self) {
        self.detach();
    }
}

fn remove_logged<H: WindowHost>(host: &mut H, role: WindowRole) {
    if let Err(err) = host.remove_window(role) {
        warn!("Failed to remove {} window: {}", role, err);
    }
}

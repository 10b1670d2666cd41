//! In-memory window host for scripted runs and tests.

use super::host::{HostError, WindowHost};
use super::window::{WindowRole, WindowSpec};
use log::trace;
use std::collections::{BTreeMap, BTreeSet};

/// State of one window attached to a [`HeadlessHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadlessWindow {
    pub spec: WindowSpec,
    pub visible: bool,
}

/// Records window placement instead of showing anything.
#[derive(Debug, Default)]
pub struct HeadlessHost {
    windows: BTreeMap<WindowRole, HeadlessWindow>,
    failing_removals: BTreeSet<WindowRole>,
    removal_attempts: Vec<WindowRole>,
    update_count: usize,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `remove_window` fail for `role`, leaving the window attached.
    pub fn fail_removal_of(mut self, role: WindowRole) -> Self {
        self.failing_removals.insert(role);
        self
    }

    pub fn window(&self, role: WindowRole) -> Option<&HeadlessWindow> {
        self.windows.get(&role)
    }

    pub fn attached(&self) -> impl Iterator<Item = WindowRole> + '_ {
        self.windows.keys().copied()
    }

    /// Every role `remove_window` was called with, in call order.
    pub fn removal_attempts(&self) -> &[WindowRole] {
        &self.removal_attempts
    }

    pub fn update_count(&self) -> usize {
        self.update_count
    }

    fn window_mut(&mut self, role: WindowRole) -> Result<&mut HeadlessWindow, HostError> {
        self.windows
            .get_mut(&role)
            .ok_or(HostError::NotAttached(role))
    }
}

impl WindowHost for HeadlessHost {
    fn add_window(&mut self, role: WindowRole, spec: WindowSpec) -> Result<(), HostError> {
        if self.windows.contains_key(&role) {
            return Err(HostError::AlreadyAttached(role));
        }
        trace!("add {role} window: {spec:?}");
        self.windows.insert(
            role,
            HeadlessWindow {
                spec,
                visible: true,
            },
        );
        Ok(())
    }

    fn update_window(&mut self, role: WindowRole, spec: WindowSpec) -> Result<(), HostError> {
        trace!("update {role} window: {spec:?}");
        self.window_mut(role)?.spec = spec;
        self.update_count += 1;
        Ok(())
    }

    fn set_visible(&mut self, role: WindowRole, visible: bool) -> Result<(), HostError> {
        self.window_mut(role)?.visible = visible;
        Ok(())
    }

    fn remove_window(&mut self, role: WindowRole) -> Result<(), HostError> {
        self.removal_attempts.push(role);
        if self.failing_removals.contains(&role) {
            return Err(HostError::Rejected(format!("{role} window is busy")));
        }
        self.windows
            .remove(&role)
            .map(|_| ())
            .ok_or(HostError::NotAttached(role))
    }
}

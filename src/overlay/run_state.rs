//! Process-wide "overlay is active" state with a single writer.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Read-only view of whether an overlay session is currently alive.
///
/// Clones share the same flag. The only way to set it is to hold the
/// [`RunGuard`] returned by [`RunState::claim`]; dropping the guard clears it.
#[derive(Debug, Clone, Default)]
pub struct RunState {
    active: Arc<AtomicBool>,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Marks the overlay active and returns the guard that owns the flag.
    ///
    /// Returns `None` if another guard is alive.
    pub(crate) fn claim(&self) -> Option<RunGuard> {
        self.active
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| RunGuard {
                active: Arc::clone(&self.active),
            })
    }
}

/// Exclusive writer of a [`RunState`]; clears the flag when dropped.
#[derive(Debug)]
pub(crate) struct RunGuard {
    active: Arc<AtomicBool>,
}

impl Drop for RunGuard {
    fn drop(&mut self) {
        self.active.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_sets_and_clears_flag() {
        let state = RunState::new();
        let reader = state.clone();
        assert!(!reader.is_active());

        let guard = state.claim().expect("first claim");
        assert!(reader.is_active());

        drop(guard);
        assert!(!reader.is_active());
    }

    #[test]
    fn only_one_writer_at_a_time() {
        let state = RunState::new();
        let _guard = state.claim().expect("first claim");
        assert!(state.clone().claim().is_none());
    }

    #[test]
    fn state_can_be_claimed_again_after_release() {
        let state = RunState::new();
        drop(state.claim());
        assert!(state.claim().is_some());
    }
}

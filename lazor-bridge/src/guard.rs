//! Idle / in-flight state of the bridge.
//!
//! A render holds an [`InvocationGuard`] for as long as the engine call is
//! outstanding. Dropping the guard is the only way back to idle, so every
//! exit path (success, failure, timeout, a task dropped by its executor)
//! releases it.

use std::cell::Cell;
use std::rc::Rc;

/// Shared idle / in-flight flag.
///
/// Clones observe the same flag. Single threaded: the bridge lives on the
/// UI event loop.
#[derive(Debug, Clone, Default)]
pub struct InvocationState {
    in_flight: Rc<Cell<bool>>,
}

impl InvocationState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }

    /// Moves to in-flight and returns the guard, or `None` when a render is
    /// already in flight.
    pub fn try_acquire(&self) -> Option<InvocationGuard> {
        if self.in_flight.replace(true) {
            return None;
        }

        Some(InvocationGuard {
            in_flight: self.in_flight.clone(),
        })
    }
}

/// Proof that the holder owns the single in-flight slot.
#[derive(Debug)]
#[must_use = "dropping the guard immediately returns the bridge to idle"]
pub struct InvocationGuard {
    in_flight: Rc<Cell<bool>>,
}

impl Drop for InvocationGuard {
    fn drop(&mut self) {
        self.in_flight.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let state = InvocationState::new();
        assert!(!state.is_in_flight());
    }

    #[test]
    fn test_second_acquire_is_refused() {
        let state = InvocationState::new();

        let guard = state.try_acquire();
        assert!(guard.is_some());
        assert!(state.is_in_flight());

        assert!(state.try_acquire().is_none());
        // refusing must not clear the flag held by the first guard
        assert!(state.is_in_flight());
    }

    #[test]
    fn test_drop_releases() {
        let state = InvocationState::new();

        {
            let _guard = state.try_acquire().unwrap();
            assert!(state.is_in_flight());
        }

        assert!(!state.is_in_flight());
        assert!(state.try_acquire().is_some());
    }

    #[test]
    fn test_clones_share_the_flag() {
        let state = InvocationState::new();
        let observer = state.clone();

        let guard = state.try_acquire().unwrap();
        assert!(observer.is_in_flight());
        assert!(observer.try_acquire().is_none());

        drop(guard);
        assert!(!observer.is_in_flight());
    }
}

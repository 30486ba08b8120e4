//! Single in-flight refresh tracking.
//!
//! A host starts a refresh with [`RefreshGuard::begin`], does its (possibly
//! delayed) work, and only applies the result if [`RefreshGuard::complete`]
//! accepts the ticket. Starting a new refresh supersedes any earlier one, so
//! a slow, stale result can never overwrite a newer one.

use std::sync::{Arc, Mutex, MutexGuard};

use log::debug;
use serde::{Deserialize, Serialize};

/// Identifies one refresh request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
pub struct RefreshTicket {
    pub generation: u64,
}

#[derive(Debug, Default)]
struct RefreshState {
    generation: u64,
    pending: Option<u64>,
}

#[derive(Debug, Default, uniffi::Object)]
pub struct RefreshGuard {
    state: Mutex<RefreshState>,
}

impl RefreshGuard {
    fn lock(&self) -> MutexGuard<'_, RefreshState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Complete `ticket` and hand back `value` only if the ticket is current.
    pub fn complete_with<T>(&self, ticket: RefreshTicket, value: T) -> Option<T> {
        self.complete(ticket).then_some(value)
    }
}

#[uniffi::export]
impl RefreshGuard {
    #[uniffi::constructor]
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Start a refresh, superseding any pending one.
    pub fn begin(&self) -> RefreshTicket {
        let mut state = self.lock();
        state.generation += 1;
        let generation = state.generation;
        if let Some(previous) = state.pending.replace(generation) {
            debug!(
                "event=refresh_superseded module=refresh previous={} current={}",
                previous, generation
            );
        }
        RefreshTicket { generation }
    }

    /// Finish a refresh. Returns `false` for superseded or cancelled tickets.
    pub fn complete(&self, ticket: RefreshTicket) -> bool {
        let mut state = self.lock();
        if state.pending == Some(ticket.generation) {
            state.pending = None;
            true
        } else {
            debug!(
                "event=refresh_stale module=refresh ticket={} pending={:?}",
                ticket.generation, state.pending
            );
            false
        }
    }

    pub fn cancel(&self) {
        self.lock().pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.lock().pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_single_refresh() {
        let guard = RefreshGuard::new();
        assert!(!guard.is_pending());
        let ticket = guard.begin();
        assert!(guard.is_pending());
        assert!(guard.complete(ticket));
        assert!(!guard.is_pending());
        // a ticket completes once
        assert!(!guard.complete(ticket));
    }

    #[test]
    fn test_later_refresh_supersedes_earlier() {
        let guard = RefreshGuard::new();
        let first = guard.begin();
        let second = guard.begin();
        assert_ne!(first, second);

        // the stale result arrives first and is dropped
        assert!(!guard.complete(first));
        assert!(guard.is_pending());
        assert!(guard.complete(second));
    }

    #[test]
    fn test_out_of_order_completion() {
        let guard = RefreshGuard::new();
        let first = guard.begin();
        let second = guard.begin();
        assert!(guard.complete(second));
        assert!(!guard.complete(first));
    }

    #[test]
    fn test_cancel_rejects_pending() {
        let guard = RefreshGuard::new();
        let ticket = guard.begin();
        guard.cancel();
        assert!(!guard.is_pending());
        assert!(!guard.complete(ticket));
    }

    #[test]
    fn test_complete_with() {
        let guard = RefreshGuard::new();
        let stale = guard.begin();
        let fresh = guard.begin();
        assert_eq!(guard.complete_with(stale, "old"), None);
        assert_eq!(guard.complete_with(fresh, "new"), Some("new"));
    }

    #[test]
    fn test_concurrent_begins_leave_one_winner() {
        let guard = RefreshGuard::new();
        let tickets: Vec<RefreshTicket> = (0..8)
            .map(|_| {
                let guard = Arc::clone(&guard);
                thread::spawn(move || guard.begin())
            })
            .collect::<Vec<_>>()
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect();

        let accepted = tickets.iter().filter(|t| guard.complete(**t)).count();
        assert_eq!(accepted, 1);
        assert!(!guard.is_pending());
    }
}

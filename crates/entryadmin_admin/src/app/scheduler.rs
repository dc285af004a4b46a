//! Single-slot debounce scheduler.

use std::time::{Duration, Instant};

#[derive(Debug)]
struct Pending<A> {
    action: A,
    due_at: Instant,
}

/// Holds at most one pending action; scheduling again replaces it.
///
/// The owner polls with the current time and runs whatever comes back, so an
/// action never fires without a `poll` and a cancelled action never fires.
#[derive(Debug)]
pub struct Debouncer<A> {
    pending: Option<Pending<A>>,
}

impl<A> Default for Debouncer<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Debouncer<A> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Schedule `action` to become due `delay` after `now`, replacing any
    /// pending action.
    pub fn schedule(&mut self, action: A, delay: Duration, now: Instant) {
        self.pending = Some(Pending {
            action,
            due_at: now + delay,
        });
    }

    /// Take the pending action if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<A> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|pending| now >= pending.due_at);
        if !due {
            return None;
        }
        self.pending.take().map(|pending| pending.action)
    }

    /// Drop the pending action, returning it.
    pub fn cancel_pending(&mut self) -> Option<A> {
        self.pending.take().map(|pending| pending.action)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Deadline of the pending action.
    pub fn due_at(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.due_at)
    }
}

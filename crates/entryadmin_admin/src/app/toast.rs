//! Single-slot toast notifier.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Message currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub expires_at: Instant,
}

/// Shows one toast at a time; a newer toast replaces the current one and
/// restarts the lifetime.
#[derive(Debug)]
pub struct ToastNotifier {
    ttl: Duration,
    current: Option<Toast>,
}

impl ToastNotifier {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, current: None }
    }

    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind, now: Instant) {
        self.current = Some(Toast {
            message: message.into(),
            kind,
            expires_at: now + self.ttl,
        });
    }

    /// Clear the toast once its lifetime has elapsed.
    ///
    /// # Returns
    /// `true` when a toast was removed.
    pub fn expire(&mut self, now: Instant) -> bool {
        let expired = self
            .current
            .as_ref()
            .is_some_and(|toast| now >= toast.expires_at);
        if expired {
            self.current = None;
        }
        expired
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn next_expiry(&self) -> Option<Instant> {
        self.current.as_ref().map(|toast| toast.expires_at)
    }
}

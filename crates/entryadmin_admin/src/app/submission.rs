//! Public "new entry" form with a debounced duplicate check.

use super::{
    messages, Clock, ControllerSettings, Debouncer, DialogHandle, Navigator, Route, Toast,
    ToastKind, ToastNotifier,
};
use crate::backend::{BackendHandle, CoreCmd, CoreErrorSource, CoreEvent};
use entryadmin_core::text::{validate_entry_text, TextError};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Form state for a public submission awaiting admin approval.
pub struct SubmissionController {
    backend: BackendHandle,
    clock: Arc<dyn Clock>,
    dialog: Box<dyn DialogHandle>,
    navigator: Box<dyn Navigator>,
    settings: ControllerSettings,
    text: String,
    touched: bool,
    exists_check: Debouncer<String>,
    exists_seq: u64,
    checking: bool,
    duplicate: bool,
    submitting: bool,
    submitted: bool,
    redirect: Debouncer<Route>,
    toast: ToastNotifier,
}

impl SubmissionController {
    pub fn new(
        backend: BackendHandle,
        clock: Arc<dyn Clock>,
        dialog: Box<dyn DialogHandle>,
        navigator: Box<dyn Navigator>,
        settings: ControllerSettings,
    ) -> Self {
        Self {
            backend,
            clock,
            dialog,
            navigator,
            toast: ToastNotifier::new(settings.toast_ttl),
            settings,
            text: String::new(),
            touched: false,
            exists_check: Debouncer::new(),
            exists_seq: 0,
            checking: false,
            duplicate: false,
            submitting: false,
            submitted: false,
            redirect: Debouncer::new(),
        }
    }

    /// Expire toasts, apply backend events, and fire due timers.
    pub fn update(&mut self) {
        let now = self.clock.now();
        self.toast.expire(now);
        while let Ok(event) = self.backend.evt_rx.try_recv() {
            self.apply_event(event);
        }
        let now = self.clock.now();
        if let Some(text) = self.exists_check.poll(now) {
            self.send_exists_check(text);
        }
        if let Some(route) = self.redirect.poll(now) {
            info!("redirecting after submission");
            self.navigator.navigate(route);
        }
    }

    pub fn next_wakeup(&self) -> Option<Instant> {
        [
            self.exists_check.due_at(),
            self.redirect.due_at(),
            self.toast.next_expiry(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// A duplicate check is scheduled or in flight.
    pub fn is_checking(&self) -> bool {
        self.checking || self.exists_check.is_pending()
    }

    pub fn is_duplicate(&self) -> bool {
        self.duplicate
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.current()
    }

    /// Validation error to display; only after a submit attempt.
    pub fn visible_validation_error(&self) -> Option<TextError> {
        if !self.touched {
            return None;
        }
        validate_entry_text(&self.text).err()
    }

    pub fn can_submit(&self) -> bool {
        !self.submitting
            && !self.submitted
            && !self.duplicate
            && !self.is_checking()
            && validate_entry_text(&self.text).is_ok()
    }

    /// Store the text and (re)schedule the duplicate check when it is valid.
    pub fn set_text(&mut self, text: impl Into<String>) {
        if self.submitting || self.submitted {
            return;
        }
        self.text = text.into();
        self.duplicate = false;
        // Any answer for older text no longer applies.
        self.exists_seq = self.exists_seq.saturating_add(1);
        self.checking = false;
        match validate_entry_text(&self.text) {
            Ok(valid) => {
                let valid = valid.to_string();
                let delay = self.settings.exists_check_debounce;
                self.exists_check.schedule(valid, delay, self.clock.now());
            }
            Err(_) => {
                self.exists_check.cancel_pending();
            }
        }
    }

    /// Create the entry.
    ///
    /// # Returns
    /// `true` when the create command was sent.
    pub fn submit(&mut self) -> bool {
        if self.submitting || self.submitted {
            return false;
        }
        let text = match validate_entry_text(&self.text) {
            Ok(text) => text.to_string(),
            Err(err) => {
                self.touched = true;
                debug!("submission blocked: {}", err);
                return false;
            }
        };
        if self.duplicate || self.is_checking() {
            self.touched = true;
            debug!("submission blocked: duplicate check pending or failed");
            return false;
        }
        if self
            .backend
            .cmd_tx
            .send(CoreCmd::CreateEntry { text })
            .is_err()
        {
            self.apply_create_failed("backend unavailable");
            return false;
        }
        self.submitting = true;
        true
    }

    fn send_exists_check(&mut self, text: String) {
        self.exists_seq = self.exists_seq.saturating_add(1);
        let seq = self.exists_seq;
        if self
            .backend
            .cmd_tx
            .send(CoreCmd::CheckTextExists { seq, text })
            .is_err()
        {
            // Same as a failing check: not a duplicate.
            warn!("duplicate check skipped: backend unavailable");
            return;
        }
        self.checking = true;
    }

    pub(crate) fn apply_event(&mut self, event: CoreEvent) {
        match event {
            CoreEvent::TextExists { seq, exists } => {
                if seq != self.exists_seq {
                    debug!("dropping stale duplicate check seq={}", seq);
                    return;
                }
                self.checking = false;
                self.duplicate = exists;
            }
            CoreEvent::Error {
                source: CoreErrorSource::ExistsCheck { seq },
                message,
            } => {
                if seq != self.exists_seq {
                    return;
                }
                warn!("duplicate check failed: {}", message);
                self.checking = false;
                self.duplicate = false;
            }
            CoreEvent::EntryCreated { entry } => {
                if !self.submitting {
                    return;
                }
                info!("submitted entry {}", entry.id);
                self.submitting = false;
                self.submitted = true;
                self.dialog.dismiss_confirmation();
                self.show_toast(messages::SUBMIT_DONE, ToastKind::Success);
                let (delay, now) = (self.settings.redirect_delay, self.clock.now());
                self.redirect.schedule(Route::PublicList, delay, now);
            }
            CoreEvent::Error {
                source: CoreErrorSource::Create,
                message,
            } => {
                if !self.submitting {
                    return;
                }
                self.apply_create_failed(&message);
            }
            other => debug!("submission controller ignoring event: {:?}", other),
        }
    }

    fn apply_create_failed(&mut self, message: &str) {
        warn!("submission failed: {}", message);
        self.submitting = false;
        self.dialog.dismiss_confirmation();
        self.show_toast(messages::SUBMIT_FAILED, ToastKind::Error);
    }

    fn show_toast(&mut self, message: &str, kind: ToastKind) {
        let now = self.clock.now();
        self.toast.show(message, kind, now);
    }
}

//! Admin edit screen: load one entry, edit its text, save.

use super::{messages, Navigator, Route};
use crate::backend::{BackendHandle, CoreCmd, CoreErrorSource, CoreEvent, UpdateOrigin};
use entryadmin_core::models::{Entry, EntryId};
use entryadmin_core::text::{validate_entry_text, TextError};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditPhase {
    Loading,
    Ready,
    Editing,
    Submitting,
    /// Saved and navigated back to the list.
    Saved,
    /// Terminal; the form is never shown.
    Failed(String),
}

/// Parse a route id; only positive integers are accepted.
pub fn parse_route_id(raw: Option<&str>) -> Option<EntryId> {
    raw?.trim().parse::<EntryId>().ok().filter(|id| *id > 0)
}

pub struct AdminEditController {
    backend: BackendHandle,
    navigator: Box<dyn Navigator>,
    entry_id: Option<EntryId>,
    original: Option<Entry>,
    text: String,
    phase: EditPhase,
    error: Option<String>,
    touched: bool,
}

impl AdminEditController {
    /// Open the screen for `route_id` and start loading the entry.
    ///
    /// A missing or non-positive id fails immediately without contacting the
    /// backend.
    pub fn open(
        backend: BackendHandle,
        navigator: Box<dyn Navigator>,
        route_id: Option<&str>,
    ) -> Self {
        let entry_id = parse_route_id(route_id);
        let mut controller = Self {
            backend,
            navigator,
            entry_id,
            original: None,
            text: String::new(),
            phase: EditPhase::Loading,
            error: None,
            touched: false,
        };
        match entry_id {
            None => {
                warn!("edit opened with invalid id {:?}", route_id);
                controller.phase = EditPhase::Failed(messages::INVALID_ID.to_string());
            }
            Some(id) => {
                if controller
                    .backend
                    .cmd_tx
                    .send(CoreCmd::FetchEntry { id })
                    .is_err()
                {
                    warn!("entry load failed: backend unavailable");
                    controller.phase = EditPhase::Failed(messages::LOAD_ENTRY_FAILED.to_string());
                }
            }
        }
        controller
    }

    pub fn update(&mut self) {
        while let Ok(event) = self.backend.evt_rx.try_recv() {
            self.apply_event(event);
        }
    }

    pub fn phase(&self) -> &EditPhase {
        &self.phase
    }

    pub fn entry_id(&self) -> Option<EntryId> {
        self.entry_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Save error shown above the form.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the form is shown and editable.
    pub fn is_editable(&self) -> bool {
        matches!(self.phase, EditPhase::Ready | EditPhase::Editing)
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        if !self.is_editable() {
            return;
        }
        self.text = text.into();
        self.phase = EditPhase::Editing;
    }

    /// Validation result for the current text.
    pub fn validation(&self) -> Result<(), TextError> {
        validate_entry_text(&self.text).map(|_| ())
    }

    /// Validation error to display; only after a submit attempt.
    pub fn visible_validation_error(&self) -> Option<TextError> {
        if !self.touched {
            return None;
        }
        self.validation().err()
    }

    pub fn can_submit(&self) -> bool {
        self.is_editable() && self.original.is_some() && self.validation().is_ok()
    }

    /// Send the edited entry.
    ///
    /// `created_at`, `modified_at`, and `published` are echoed from the
    /// loaded entry.
    ///
    /// # Returns
    /// `true` when an update was sent.
    pub fn submit(&mut self) -> bool {
        if !self.is_editable() {
            return false;
        }
        let text = match validate_entry_text(&self.text) {
            Ok(text) => text.to_string(),
            Err(err) => {
                self.touched = true;
                debug!("edit submit blocked: {}", err);
                return false;
            }
        };
        let Some(original) = self.original.as_ref() else {
            return false;
        };
        let payload = original.with_text(text);
        if self
            .backend
            .cmd_tx
            .send(CoreCmd::UpdateEntry {
                entry: payload,
                origin: UpdateOrigin::Edit,
            })
            .is_err()
        {
            warn!("entry save failed: backend unavailable");
            self.error = Some(messages::SAVE_FAILED.to_string());
            return false;
        }
        self.error = None;
        self.phase = EditPhase::Submitting;
        true
    }

    pub(crate) fn apply_event(&mut self, event: CoreEvent) {
        match event {
            CoreEvent::EntryLoaded { entry } => {
                if self.phase != EditPhase::Loading || Some(entry.id) != self.entry_id {
                    debug!("ignoring entry {} loaded outside the load phase", entry.id);
                    return;
                }
                self.text = entry.text.clone();
                self.original = Some(entry);
                self.phase = EditPhase::Ready;
            }
            CoreEvent::Error {
                source: CoreErrorSource::FetchEntry { id },
                message,
            } => {
                if self.phase != EditPhase::Loading || Some(id) != self.entry_id {
                    return;
                }
                warn!("entry {} load failed: {}", id, message);
                self.phase = EditPhase::Failed(messages::LOAD_ENTRY_FAILED.to_string());
            }
            CoreEvent::EntryUpdated {
                entry,
                origin: UpdateOrigin::Edit,
            } => {
                if self.phase != EditPhase::Submitting {
                    return;
                }
                debug!("entry {} saved", entry.id);
                self.phase = EditPhase::Saved;
                self.navigator.navigate(Route::AdminList);
            }
            CoreEvent::Error {
                source:
                    CoreErrorSource::Update {
                        id,
                        origin: UpdateOrigin::Edit,
                    },
                message,
            } => {
                if self.phase != EditPhase::Submitting {
                    return;
                }
                warn!("entry {} save failed: {}", id, message);
                self.error = Some(messages::SAVE_FAILED.to_string());
                self.phase = EditPhase::Editing;
            }
            other => debug!("edit controller ignoring event: {:?}", other),
        }
    }
}

//! Optimistic publish/unpublish.

use super::AdminListController;
use crate::app::{messages, ToastKind};
use crate::backend::{CoreCmd, UpdateOrigin};
use entryadmin_core::models::EntryId;
use tracing::{debug, warn};

impl AdminListController {
    /// Flip `published` on the held row now and persist it in the background.
    ///
    /// # Returns
    /// `true` when an update was sent. A second toggle on an entry whose
    /// update is still in flight, or an id not on the current page, is
    /// ignored.
    pub fn toggle_publication(&mut self, id: EntryId) -> bool {
        if self.toggles_in_flight.contains_key(&id) {
            debug!("toggle ignored: update already in flight for entry {}", id);
            return false;
        }
        let Some(entry) = self
            .page
            .as_mut()
            .and_then(|page| page.content.iter_mut().find(|entry| entry.id == id))
        else {
            warn!("toggle ignored: entry {} is not on the current page", id);
            return false;
        };
        let prior = entry.published;
        entry.published = !prior;
        let payload = entry.clone();
        self.toggles_in_flight.insert(id, prior);

        if self
            .backend
            .cmd_tx
            .send(CoreCmd::UpdateEntry {
                entry: payload,
                origin: UpdateOrigin::Toggle,
            })
            .is_err()
        {
            self.apply_toggle_failed(id, "backend unavailable");
            return false;
        }
        true
    }

    pub fn is_toggle_pending(&self, id: EntryId) -> bool {
        self.toggles_in_flight.contains_key(&id)
    }

    pub(super) fn apply_toggle_saved(&mut self, id: EntryId) {
        let Some(prior) = self.toggles_in_flight.remove(&id) else {
            debug!("toggle result for entry {} with nothing in flight", id);
            return;
        };
        let message = if prior {
            messages::UNPUBLISHED
        } else {
            messages::PUBLISHED
        };
        self.show_toast(message, ToastKind::Success);
        self.fetch_current_page();
    }

    /// Restore the pre-toggle value; no re-fetch.
    pub(super) fn apply_toggle_failed(&mut self, id: EntryId, message: &str) {
        let Some(prior) = self.toggles_in_flight.remove(&id) else {
            return;
        };
        warn!("publication update for entry {} failed: {}", id, message);
        if let Some(entry) = self
            .page
            .as_mut()
            .and_then(|page| page.content.iter_mut().find(|entry| entry.id == id))
        {
            entry.published = prior;
        }
        self.show_toast(messages::TOGGLE_FAILED, ToastKind::Error);
    }
}

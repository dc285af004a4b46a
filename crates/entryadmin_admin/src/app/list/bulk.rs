//! Populate and clear-all.

use super::AdminListController;
use crate::app::{messages, ToastKind};
use crate::backend::CoreCmd;
use tracing::{debug, info, warn};

impl AdminListController {
    /// Count bound to the populate input.
    pub fn populate_count(&self) -> usize {
        self.populate_count
    }

    pub fn set_populate_count(&mut self, count: usize) {
        self.populate_count = count;
    }

    /// Populate with the bound count.
    pub fn populate_selected(&mut self) -> bool {
        self.populate(self.populate_count)
    }

    /// Ask the store to generate `count` fake entries.
    ///
    /// # Returns
    /// `false` when a populate is already running or the backend is gone.
    pub fn populate(&mut self, count: usize) -> bool {
        if self.bulk.populating {
            debug!("populate ignored: already running");
            return false;
        }
        self.bulk.populated = None;
        self.bulk.populate_error = None;
        self.bulk.populating = true;
        info!("populating {} entries", count);
        if self
            .backend
            .cmd_tx
            .send(CoreCmd::Populate { count })
            .is_err()
        {
            self.apply_populate_failed("backend unavailable");
            return false;
        }
        true
    }

    /// Delete every entry after confirmation; declining does nothing.
    pub fn clear_all(&mut self) -> bool {
        if self.bulk.clearing {
            debug!("clear-all ignored: already running");
            return false;
        }
        if !self.confirm.confirm(messages::CLEAR_ALL_PROMPT) {
            debug!("clear-all declined");
            return false;
        }
        self.bulk.clearing = true;
        info!("clearing all entries");
        if self.backend.cmd_tx.send(CoreCmd::DeleteAll).is_err() {
            self.apply_clear_failed("backend unavailable");
            return false;
        }
        true
    }

    pub(super) fn apply_populated(&mut self, count: usize) {
        self.bulk.populating = false;
        // Shown until the refreshed page lands.
        self.bulk.populated = Some(count);
        info!("populated {} entries", count);
        self.show_toast(messages::populated(count), ToastKind::Success);
        self.fetch_current_page();
    }

    pub(super) fn apply_populate_failed(&mut self, message: &str) {
        self.bulk.populating = false;
        self.bulk.populate_error = Some(messages::POPULATE_FAILED_DETAIL.to_string());
        warn!("populate failed: {}", message);
        self.show_toast(messages::POPULATE_FAILED, ToastKind::Error);
    }

    pub(super) fn apply_cleared(&mut self, removed: usize) {
        self.bulk.clearing = false;
        self.bulk.populated = None;
        self.bulk.populate_error = None;
        info!("cleared {} entries", removed);
        self.show_toast(messages::CLEAR_ALL_DONE, ToastKind::Success);
        self.fetch_current_page();
    }

    pub(super) fn apply_clear_failed(&mut self, message: &str) {
        self.bulk.clearing = false;
        warn!("clear-all failed: {}", message);
        self.show_toast(messages::CLEAR_ALL_FAILED, ToastKind::Error);
    }
}

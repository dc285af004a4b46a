//! Admin controllers: list, edit, and public submission.
//!
//! Each controller owns its view state, sends [`crate::backend::CoreCmd`]
//! values to the worker, and applies the matching events in `update()`.
//! Time comes from an injected [`Clock`] so debounce and toast expiry can be
//! driven deterministically.

mod clock;
mod edit;
mod hooks;
mod list;
pub mod messages;
mod query;
mod scheduler;
mod submission;
mod toast;

pub use clock::{Clock, ManualClock, SystemClock};
pub use edit::{parse_route_id, AdminEditController, EditPhase};
pub use hooks::{ConfirmationGate, DialogHandle, Navigator, Route};
pub use list::{AdminListController, BulkState, FetchCounters};
pub use query::{QueryError, QueryState};
pub use scheduler::Debouncer;
pub use submission::SubmissionController;
pub use toast::{Toast, ToastKind, ToastNotifier};

use entryadmin_core::constants::{DEFAULT_EXISTS_CHECK_DEBOUNCE_MS, DEFAULT_REDIRECT_DELAY_MS};
use entryadmin_core::Config;
use std::time::Duration;

/// Timing and sizing knobs shared by the controllers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerSettings {
    pub page_size: usize,
    pub populate_count: usize,
    pub search_debounce: Duration,
    pub exists_check_debounce: Duration,
    pub toast_ttl: Duration,
    pub redirect_delay: Duration,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for ControllerSettings {
    fn from(config: &Config) -> Self {
        Self {
            page_size: config.page_size,
            populate_count: config.populate_count,
            search_debounce: Duration::from_millis(config.search_debounce_ms),
            exists_check_debounce: Duration::from_millis(DEFAULT_EXISTS_CHECK_DEBOUNCE_MS),
            toast_ttl: Duration::from_millis(config.toast_ttl_ms),
            redirect_delay: Duration::from_millis(DEFAULT_REDIRECT_DELAY_MS),
        }
    }
}

#[cfg(test)]
mod tests;

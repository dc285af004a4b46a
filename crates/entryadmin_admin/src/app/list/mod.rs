//! Paginated admin list: query changes, page slot, and the page corrector.

mod bulk;
mod toggle;

use super::messages;
use super::{
    Clock, ConfirmationGate, ControllerSettings, Debouncer, QueryState, Toast, ToastKind,
    ToastNotifier,
};
use crate::backend::{BackendHandle, CoreCmd, CoreErrorSource, CoreEvent, UpdateOrigin};
use entryadmin_core::models::{Entry, EntryId, Page, PublicationFilter, SortField};
use entryadmin_core::pagination::{page_links, PageLink};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// Progress and outcome of the populate / clear-all buttons.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkState {
    pub populating: bool,
    /// Count reported by the last successful populate.
    pub populated: Option<usize>,
    pub populate_error: Option<String>,
    pub clearing: bool,
}

/// Page fetch bookkeeping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchCounters {
    pub requests_sent: u64,
    pub results_applied: u64,
    pub stale_drops: u64,
    pub corrections: u64,
    pub failures: u64,
}

/// State behind the admin entry table.
pub struct AdminListController {
    backend: BackendHandle,
    clock: Arc<dyn Clock>,
    confirm: Box<dyn ConfirmationGate>,
    settings: ControllerSettings,
    query: QueryState,
    page: Option<Page<Entry>>,
    page_seq: u64,
    page_in_flight: bool,
    corrective_seq: Option<u64>,
    search_debounce: Debouncer<()>,
    /// Entry id -> publication value before the optimistic flip.
    toggles_in_flight: HashMap<EntryId, bool>,
    bulk: BulkState,
    populate_count: usize,
    toast: ToastNotifier,
    perf: FetchCounters,
}

impl AdminListController {
    /// Build the controller and request the first page.
    pub fn new(
        backend: BackendHandle,
        clock: Arc<dyn Clock>,
        confirm: Box<dyn ConfirmationGate>,
        settings: ControllerSettings,
    ) -> Self {
        let mut controller = Self {
            backend,
            clock,
            confirm,
            query: QueryState::new(settings.page_size),
            page: None,
            page_seq: 0,
            page_in_flight: false,
            corrective_seq: None,
            search_debounce: Debouncer::new(),
            toggles_in_flight: HashMap::new(),
            bulk: BulkState::default(),
            populate_count: settings.populate_count,
            toast: ToastNotifier::new(settings.toast_ttl),
            perf: FetchCounters::default(),
            settings,
        };
        controller.fetch_current_page();
        controller
    }

    /// Expire toasts, apply backend events, and fire a due search.
    pub fn update(&mut self) {
        self.toast.expire(self.clock.now());
        while let Ok(event) = self.backend.evt_rx.try_recv() {
            self.apply_event(event);
        }
        if self.search_debounce.poll(self.clock.now()).is_some() {
            self.fetch_current_page();
        }
    }

    /// Earliest deadline `update()` needs to run for.
    pub fn next_wakeup(&self) -> Option<Instant> {
        [self.search_debounce.due_at(), self.toast.next_expiry()]
            .into_iter()
            .flatten()
            .min()
    }

    /// No fetch, bulk action, toggle, or search is outstanding.
    pub fn is_idle(&self) -> bool {
        !self.page_in_flight
            && !self.bulk.populating
            && !self.bulk.clearing
            && self.toggles_in_flight.is_empty()
            && !self.search_debounce.is_pending()
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    /// Last successfully loaded page.
    pub fn page(&self) -> Option<&Page<Entry>> {
        self.page.as_ref()
    }

    /// Rows of the held page.
    pub fn entries(&self) -> &[Entry] {
        self.page
            .as_ref()
            .map(|page| page.content.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_loading(&self) -> bool {
        self.page_in_flight
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.current()
    }

    pub fn bulk(&self) -> &BulkState {
        &self.bulk
    }

    pub fn fetch_counters(&self) -> FetchCounters {
        self.perf
    }

    /// Page-button strip for the held page.
    pub fn page_links(&self) -> Vec<PageLink> {
        let total_pages = self.page.as_ref().map_or(0, |page| page.total_pages);
        page_links(total_pages, self.query.page_index())
    }

    pub fn set_page(&mut self, index: usize) {
        self.query.set_page(index);
        self.fetch_current_page();
    }

    /// # Returns
    /// `false` when `size` is not an offered page size; nothing changes then.
    pub fn set_page_size(&mut self, size: usize) -> bool {
        match self.query.set_page_size(size) {
            Ok(()) => {
                self.fetch_current_page();
                true
            }
            Err(err) => {
                warn!("ignoring page size change: {}", err);
                false
            }
        }
    }

    /// Store the search text now; the fetch waits for the debounce unless the
    /// text was cleared.
    pub fn set_free_text(&mut self, text: impl Into<String>) {
        self.query.set_free_text(text);
        if self.query.free_text().trim().is_empty() {
            self.fetch_current_page();
            return;
        }
        let delay = self.settings.search_debounce;
        self.search_debounce.schedule((), delay, self.clock.now());
    }

    pub fn clear_free_text(&mut self) {
        self.set_free_text(String::new());
    }

    pub fn set_sort(&mut self, field: SortField) {
        self.query.set_sort(field);
        self.fetch_current_page();
    }

    pub fn set_publication_filter(&mut self, filter: PublicationFilter) {
        self.query.set_publication_filter(filter);
        self.fetch_current_page();
    }

    /// Re-fetch the current page with unchanged parameters.
    pub fn refresh(&mut self) {
        self.fetch_current_page();
    }

    pub(crate) fn show_toast(&mut self, message: impl Into<String>, kind: ToastKind) {
        let now = self.clock.now();
        self.toast.show(message, kind, now);
    }

    /// Send a page request for the current query.
    ///
    /// Any pending debounced search is dropped since the request already
    /// carries the latest text.
    ///
    /// # Returns
    /// `false` when the backend is unavailable.
    fn fetch_current_page(&mut self) -> bool {
        self.search_debounce.cancel_pending();
        self.page_seq = self.page_seq.saturating_add(1);
        let seq = self.page_seq;
        let request = self.query.to_request();
        if self
            .backend
            .cmd_tx
            .send(CoreCmd::FetchPage { seq, request })
            .is_err()
        {
            warn!("page fetch failed: backend unavailable");
            self.page_in_flight = false;
            self.perf.failures = self.perf.failures.saturating_add(1);
            self.show_toast(messages::LOAD_PAGE_FAILED, ToastKind::Error);
            return false;
        }
        self.page_in_flight = true;
        self.perf.requests_sent = self.perf.requests_sent.saturating_add(1);
        true
    }

    pub(crate) fn apply_event(&mut self, event: CoreEvent) {
        match event {
            CoreEvent::PageLoaded { seq, page } => self.apply_page_loaded(seq, page),
            CoreEvent::Error {
                source: CoreErrorSource::FetchPage { seq },
                message,
            } => self.apply_page_failed(seq, &message),
            CoreEvent::EntryUpdated {
                entry,
                origin: UpdateOrigin::Toggle,
            } => self.apply_toggle_saved(entry.id),
            CoreEvent::Error {
                source:
                    CoreErrorSource::Update {
                        id,
                        origin: UpdateOrigin::Toggle,
                    },
                message,
            } => self.apply_toggle_failed(id, &message),
            CoreEvent::Populated { count } => self.apply_populated(count),
            CoreEvent::Error {
                source: CoreErrorSource::Populate,
                message,
            } => self.apply_populate_failed(&message),
            CoreEvent::AllDeleted { removed } => self.apply_cleared(removed),
            CoreEvent::Error {
                source: CoreErrorSource::DeleteAll,
                message,
            } => self.apply_clear_failed(&message),
            other => debug!("list controller ignoring event: {:?}", other),
        }
    }

    fn apply_page_loaded(&mut self, seq: u64, mut page: Page<Entry>) {
        if seq != self.page_seq {
            self.perf.stale_drops = self.perf.stale_drops.saturating_add(1);
            debug!(
                "dropping stale page response seq={} latest={}",
                seq, self.page_seq
            );
            return;
        }
        self.page_in_flight = false;
        let corrective = self.corrective_seq.take() == Some(seq);

        // Filter on server values; in-flight flips are overlaid on the kept rows.
        let filter = self.query.publication_filter();
        page.content.retain(|entry| filter.keeps(entry));
        for entry in page.content.iter_mut() {
            if let Some(prior) = self.toggles_in_flight.get(&entry.id) {
                entry.published = !*prior;
            }
        }
        let total_pages = page.total_pages;
        self.page = Some(page);
        self.bulk.populated = None;
        self.bulk.populate_error = None;
        self.perf.results_applied = self.perf.results_applied.saturating_add(1);

        if corrective {
            return;
        }
        if let Some(corrected) = self.query.correct_page_index(total_pages) {
            self.perf.corrections = self.perf.corrections.saturating_add(1);
            debug!(
                "page index past the end (total_pages={}), correcting to {}",
                total_pages, corrected
            );
            if self.fetch_current_page() {
                self.corrective_seq = Some(self.page_seq);
            }
        }
    }

    fn apply_page_failed(&mut self, seq: u64, message: &str) {
        if seq != self.page_seq {
            self.perf.stale_drops = self.perf.stale_drops.saturating_add(1);
            debug!("dropping stale page error seq={}: {}", seq, message);
            return;
        }
        self.page_in_flight = false;
        self.corrective_seq = None;
        self.perf.failures = self.perf.failures.saturating_add(1);
        warn!("page fetch failed: {}", message);
        self.show_toast(messages::LOAD_PAGE_FAILED, ToastKind::Error);
    }
}

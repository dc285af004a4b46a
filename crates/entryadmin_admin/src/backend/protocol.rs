//! Protocol types for the entry backend worker.

use entryadmin_core::models::{Entry, EntryId, Page, PageRequest};

/// Which screen issued an entry update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOrigin {
    /// Optimistic publish/unpublish from the list.
    Toggle,
    /// Text edit from the edit screen.
    Edit,
}

/// Commands issued by a controller for the backend worker to execute.
#[derive(Debug)]
pub enum CoreCmd {
    /// Fetch one page; `seq` is echoed back so stale replies can be dropped.
    FetchPage { seq: u64, request: PageRequest },
    /// Load a single entry for the edit screen.
    FetchEntry { id: EntryId },
    /// Create an entry from public submission text.
    CreateEntry { text: String },
    /// Persist a full entry.
    UpdateEntry { entry: Entry, origin: UpdateOrigin },
    /// Delete every entry.
    DeleteAll,
    /// Generate `count` fake entries.
    Populate { count: usize },
    /// Duplicate-text probe for the submission form.
    CheckTextExists { seq: u64, text: String },
}

/// Events produced by the backend worker and drained by the controllers.
#[derive(Debug)]
pub enum CoreEvent {
    PageLoaded { seq: u64, page: Page<Entry> },
    EntryLoaded { entry: Entry },
    EntryCreated { entry: Entry },
    EntryUpdated { entry: Entry, origin: UpdateOrigin },
    AllDeleted { removed: usize },
    Populated { count: usize },
    TextExists { seq: u64, exists: bool },
    /// Any command failure, tagged with the command that produced it.
    Error {
        source: CoreErrorSource,
        message: String,
    },
}

/// Command that produced a [`CoreEvent::Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreErrorSource {
    FetchPage { seq: u64 },
    FetchEntry { id: EntryId },
    Create,
    Update { id: EntryId, origin: UpdateOrigin },
    DeleteAll,
    Populate,
    ExistsCheck { seq: u64 },
}

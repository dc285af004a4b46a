//! Remote collaborator contract for entries.

mod memory;

pub use memory::MemoryStore;

use crate::error::AppError;
use crate::models::{Entry, EntryId, Page, PageRequest};

/// Operations the controllers need from the entry backend.
///
/// Implementations are shared with the backend worker thread, so they must be
/// `Send + Sync` and use interior mutability.
pub trait EntryStore: Send + Sync {
    /// Fetch one page.
    ///
    /// A `page_index` past the end yields an empty page whose totals are still
    /// populated.
    fn fetch_page(&self, request: &PageRequest) -> Result<Page<Entry>, AppError>;

    /// Fetch one entry by id.
    ///
    /// # Errors
    /// [`AppError::NotFound`] when no entry carries `id`.
    fn fetch_one(&self, id: EntryId) -> Result<Entry, AppError>;

    /// Create an unpublished entry from validated text.
    fn create_one(&self, text: &str) -> Result<Entry, AppError>;

    /// Persist `entry` in full, returning the stored copy.
    fn update_one(&self, entry: &Entry) -> Result<Entry, AppError>;

    /// Delete every entry, returning how many were removed.
    fn delete_all(&self) -> Result<usize, AppError>;

    /// Create `count` fake entries, returning how many were created.
    fn populate(&self, count: usize) -> Result<usize, AppError>;

    /// Whether an entry with the same text (case-insensitive) exists.
    fn text_exists(&self, text: &str) -> Result<bool, AppError>;
}

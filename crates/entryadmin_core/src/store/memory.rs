//! In-process [`EntryStore`] backed by an ordered map.

use chrono::Utc;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info};

use super::EntryStore;
use crate::error::AppError;
use crate::models::{
    total_pages_for, Entry, EntryId, Page, PageRequest, SortDirection, SortField,
};
use crate::phrases::PhraseGenerator;
use crate::text::validate_entry_text;

struct StoreState {
    entries: BTreeMap<EntryId, Entry>,
    next_id: EntryId,
    phrases: PhraseGenerator,
}

/// Thread-safe in-memory entry store.
pub struct MemoryStore {
    state: Mutex<StoreState>,
}

impl MemoryStore {
    /// Empty store. `seed` makes populated phrases reproducible.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            state: Mutex::new(StoreState {
                entries: BTreeMap::new(),
                next_id: 1,
                phrases: PhraseGenerator::new(seed),
            }),
        }
    }

    /// Store pre-filled with `entries`; ids are kept as given.
    pub fn with_entries(entries: impl IntoIterator<Item = Entry>) -> Self {
        let store = Self::new(None);
        if let Ok(mut state) = store.state.lock() {
            for entry in entries {
                state.next_id = state.next_id.max(entry.id.saturating_add(1));
                state.entries.insert(entry.id, entry);
            }
        }
        store
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.lock().map(|state| state.entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState>, AppError> {
        self.state
            .lock()
            .map_err(|_| AppError::StorageMessage("entry store lock poisoned".to_string()))
    }
}

fn compare(a: &Entry, b: &Entry, field: SortField) -> Ordering {
    let primary = match field {
        SortField::Id => Ordering::Equal,
        SortField::Text => a.text.to_lowercase().cmp(&b.text.to_lowercase()),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        SortField::ModifiedAt => a.modified_at.cmp(&b.modified_at),
        SortField::Published => a.published.cmp(&b.published),
    };
    primary.then(a.id.cmp(&b.id))
}

impl EntryStore for MemoryStore {
    fn fetch_page(&self, request: &PageRequest) -> Result<Page<Entry>, AppError> {
        if request.page_size == 0 {
            return Err(AppError::BadRequest("page size must be positive".to_string()));
        }
        let state = self.lock()?;
        let needle = request.free_text.as_deref().map(str::to_lowercase);
        let mut matching: Vec<&Entry> = state
            .entries
            .values()
            .filter(|entry| !request.pending_only || !entry.published)
            .filter(|entry| {
                needle
                    .as_deref()
                    .map_or(true, |needle| entry.text.to_lowercase().contains(needle))
            })
            .collect();
        matching.sort_by(|a, b| {
            let ordering = compare(a, b, request.sort_field);
            match request.sort_direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });

        let total_elements = matching.len();
        let content = matching
            .into_iter()
            .skip(request.page_index.saturating_mul(request.page_size))
            .take(request.page_size)
            .cloned()
            .collect();
        Ok(Page {
            content,
            page_index: request.page_index,
            page_size: request.page_size,
            total_pages: total_pages_for(total_elements, request.page_size),
            total_elements,
        })
    }

    fn fetch_one(&self, id: EntryId) -> Result<Entry, AppError> {
        self.lock()?.entries.get(&id).cloned().ok_or(AppError::NotFound)
    }

    fn create_one(&self, text: &str) -> Result<Entry, AppError> {
        let text = validate_entry_text(text)?;
        let mut state = self.lock()?;
        let id = state.next_id;
        state.next_id = state.next_id.saturating_add(1);
        let entry = Entry::new(id, text, Utc::now());
        state.entries.insert(id, entry.clone());
        debug!("created entry {}", id);
        Ok(entry)
    }

    fn update_one(&self, entry: &Entry) -> Result<Entry, AppError> {
        let text = validate_entry_text(&entry.text)?;
        let mut state = self.lock()?;
        let stored = state.entries.get_mut(&entry.id).ok_or(AppError::NotFound)?;
        stored.text = text.to_string();
        stored.published = entry.published;
        stored.modified_at = Utc::now();
        Ok(stored.clone())
    }

    fn delete_all(&self) -> Result<usize, AppError> {
        let mut state = self.lock()?;
        let removed = state.entries.len();
        state.entries.clear();
        info!("deleted {} entries", removed);
        Ok(removed)
    }

    fn populate(&self, count: usize) -> Result<usize, AppError> {
        let mut state = self.lock()?;
        let now = Utc::now();
        let phrases = state.phrases.phrases(count);
        for text in phrases {
            let id = state.next_id;
            state.next_id = state.next_id.saturating_add(1);
            state.entries.insert(id, Entry::new(id, text, now));
        }
        info!("populated {} entries", count);
        Ok(count)
    }

    fn text_exists(&self, text: &str) -> Result<bool, AppError> {
        let wanted = text.trim().to_lowercase();
        Ok(self
            .lock()?
            .entries
            .values()
            .any(|entry| entry.text.trim().to_lowercase() == wanted))
    }
}

//! Query parameters behind the admin list.

use entryadmin_core::constants::{ALLOWED_PAGE_SIZES, DEFAULT_PAGE_SIZE};
use entryadmin_core::models::{PageRequest, PublicationFilter, SortDirection, SortField};
use entryadmin_core::text::normalize_optional_nonempty;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("page size {0} is not one of the offered sizes")]
    PageSizeNotAllowed(usize),
}

/// Current page, size, sort, text filter, and publication view.
///
/// Every change except `set_page` resets to the first page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    page_index: usize,
    page_size: usize,
    sort_field: SortField,
    sort_direction: SortDirection,
    free_text: String,
    publication_filter: PublicationFilter,
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl QueryState {
    /// Fresh state; a `page_size` outside [`ALLOWED_PAGE_SIZES`] falls back to
    /// the default.
    pub fn new(page_size: usize) -> Self {
        let page_size = if ALLOWED_PAGE_SIZES.contains(&page_size) {
            page_size
        } else {
            DEFAULT_PAGE_SIZE
        };
        Self {
            page_index: 0,
            page_size,
            sort_field: SortField::Id,
            sort_direction: SortDirection::Asc,
            free_text: String::new(),
            publication_filter: PublicationFilter::All,
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn sort_field(&self) -> SortField {
        self.sort_field
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn free_text(&self) -> &str {
        &self.free_text
    }

    pub fn publication_filter(&self) -> PublicationFilter {
        self.publication_filter
    }

    pub fn set_page(&mut self, index: usize) {
        self.page_index = index;
    }

    /// # Errors
    /// [`QueryError::PageSizeNotAllowed`] leaves the state untouched.
    pub fn set_page_size(&mut self, size: usize) -> Result<(), QueryError> {
        if !ALLOWED_PAGE_SIZES.contains(&size) {
            return Err(QueryError::PageSizeNotAllowed(size));
        }
        self.page_size = size;
        self.page_index = 0;
        Ok(())
    }

    pub fn set_free_text(&mut self, text: impl Into<String>) {
        self.free_text = text.into();
        self.page_index = 0;
    }

    /// Same field flips the direction; a new field starts ascending.
    pub fn set_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Asc;
        }
        self.page_index = 0;
    }

    pub fn set_publication_filter(&mut self, filter: PublicationFilter) {
        self.publication_filter = filter;
        self.page_index = 0;
    }

    /// Pull `page_index` back inside `0..total_pages`.
    ///
    /// # Returns
    /// The new index when a correction was needed.
    pub(crate) fn correct_page_index(&mut self, total_pages: usize) -> Option<usize> {
        if self.page_index == 0 || self.page_index < total_pages {
            return None;
        }
        self.page_index = total_pages.saturating_sub(1);
        Some(self.page_index)
    }

    pub fn to_request(&self) -> PageRequest {
        PageRequest {
            page_index: self.page_index,
            page_size: self.page_size,
            sort_field: self.sort_field,
            sort_direction: self.sort_direction,
            free_text: normalize_optional_nonempty(Some(self.free_text.clone())),
            pending_only: self.publication_filter.pending_only(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_sort_alternates_starting_ascending() {
        let mut query = QueryState::default();
        query.set_sort(SortField::Text);
        assert_eq!(query.sort_direction(), SortDirection::Asc);
        query.set_sort(SortField::Text);
        assert_eq!(query.sort_direction(), SortDirection::Desc);
        query.set_sort(SortField::Text);
        assert_eq!(query.sort_direction(), SortDirection::Asc);
        query.set_sort(SortField::Id);
        assert_eq!(query.sort_field(), SortField::Id);
        assert_eq!(query.sort_direction(), SortDirection::Asc);
    }

    #[test]
    fn changes_other_than_set_page_reset_to_first_page() {
        let mut query = QueryState::default();
        let changes: Vec<Box<dyn Fn(&mut QueryState)>> = vec![
            Box::new(|q: &mut QueryState| q.set_free_text("abc")),
            Box::new(|q: &mut QueryState| q.set_sort(SortField::CreatedAt)),
            Box::new(|q: &mut QueryState| q.set_publication_filter(PublicationFilter::PendingOnly)),
            Box::new(|q: &mut QueryState| q.set_page_size(20).expect("allowed size")),
        ];
        for change in changes {
            query.set_page(3);
            change(&mut query);
            assert_eq!(query.page_index(), 0);
        }
        query.set_page(4);
        assert_eq!(query.page_index(), 4);
    }

    #[test]
    fn disallowed_page_size_is_rejected_without_change() {
        let mut query = QueryState::default();
        query.set_page(2);
        assert_eq!(query.set_page_size(7), Err(QueryError::PageSizeNotAllowed(7)));
        assert_eq!(query.page_size(), 5);
        assert_eq!(query.page_index(), 2);
    }

    #[test]
    fn correct_page_index_clamps_only_out_of_range_pages() {
        let mut query = QueryState::default();
        assert_eq!(query.correct_page_index(0), None);
        query.set_page(3);
        assert_eq!(query.correct_page_index(3), Some(2));
        assert_eq!(query.correct_page_index(3), None);
        query.set_page(1);
        assert_eq!(query.correct_page_index(0), Some(0));
    }

    #[test]
    fn request_trims_text_and_maps_pending_filter() {
        let mut query = QueryState::new(10);
        query.set_free_text("  hola ");
        query.set_publication_filter(PublicationFilter::PendingOnly);
        let request = query.to_request();
        assert_eq!(request.free_text.as_deref(), Some("hola"));
        assert!(request.pending_only);
        assert_eq!(request.page_size, 10);

        query.set_free_text("   ");
        query.set_publication_filter(PublicationFilter::PublishedOnly);
        let request = query.to_request();
        assert_eq!(request.free_text, None);
        assert!(!request.pending_only);
    }
}

//! Page result model.

use serde::{Deserialize, Serialize};

/// One page of results plus the totals needed to render pagination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    /// Zero-based index of this page.
    pub page_index: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_elements: usize,
}

impl<T> Page<T> {
    /// Returns `true` when the page carries no rows.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Number of pages needed for `total_elements` rows at `page_size` per page.
///
/// Returns `0` for an empty collection or a zero page size.
pub fn total_pages_for(total_elements: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_elements.div_ceil(page_size)
}

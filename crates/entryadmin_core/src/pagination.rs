//! Page-button strip for the pagination control.

use serde::Serialize;

use crate::constants::PAGE_LINK_WINDOW;

/// One slot of the pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "index")]
pub enum PageLink {
    /// Zero-based page index.
    Page(usize),
    /// Elided run of pages.
    Gap,
}

/// Build the strip shown under the list: first and last page, the current
/// page with `window` neighbours on each side, and a gap wherever pages are
/// skipped.
///
/// `current` is zero-based and is clamped to the last page.
pub fn page_links_with_window(total_pages: usize, current: usize, window: usize) -> Vec<PageLink> {
    if total_pages == 0 {
        return vec![];
    }
    let last = total_pages - 1;
    let current = current.min(last);

    let mid_start = current.saturating_sub(window);
    let mid_end = (current + window).min(last);

    let mut links = Vec::new();
    if mid_start > 0 {
        links.push(PageLink::Page(0));
        if mid_start > 1 {
            links.push(PageLink::Gap);
        }
    }
    links.extend((mid_start..=mid_end).map(PageLink::Page));
    if mid_end < last {
        if mid_end + 1 < last {
            links.push(PageLink::Gap);
        }
        links.push(PageLink::Page(last));
    }
    links
}

/// [`page_links_with_window`] with the default [`PAGE_LINK_WINDOW`].
pub fn page_links(total_pages: usize, current: usize) -> Vec<PageLink> {
    page_links_with_window(total_pages, current, PAGE_LINK_WINDOW)
}

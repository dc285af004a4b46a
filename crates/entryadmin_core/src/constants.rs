//! Shared constants used across entryadmin crates.

/// Page size used when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Page sizes offered by the rows-per-page selector.
pub const ALLOWED_PAGE_SIZES: &[usize] = &[5, 10, 20, 50, 100];

/// Quiet period before a free-text search is sent, in milliseconds.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 500;

/// Quiet period before a duplicate-text check is sent, in milliseconds.
pub const DEFAULT_EXISTS_CHECK_DEBOUNCE_MS: u64 = 800;

/// Toast display lifetime in milliseconds.
pub const DEFAULT_TOAST_TTL_MS: u64 = 2_000;

/// Delay between a successful public submission and the redirect, in milliseconds.
pub const DEFAULT_REDIRECT_DELAY_MS: u64 = 2_000;

/// Number of fake entries generated by a populate request by default.
pub const DEFAULT_POPULATE_COUNT: usize = 10;

/// Minimum entry text length, in characters, after trimming.
pub const ENTRY_TEXT_MIN_CHARS: usize = 3;

/// Maximum entry text length, in characters, after trimming.
pub const ENTRY_TEXT_MAX_CHARS: usize = 500;

/// Pages shown on each side of the current page in the pagination strip.
pub const PAGE_LINK_WINDOW: usize = 2;

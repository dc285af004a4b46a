//! Data models for entries, pages, and page requests.

pub mod entry;
pub mod page;
pub mod query;

pub use entry::{Entry, EntryId};
pub use page::{total_pages_for, Page};
pub use query::{PageRequest, ParseQueryValueError, PublicationFilter, SortDirection, SortField};

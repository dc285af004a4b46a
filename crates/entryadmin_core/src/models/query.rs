//! Page request parameters: sort, direction, filters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::entry::Entry;
use crate::constants::DEFAULT_PAGE_SIZE;

/// Error returned when a sort field, direction, or filter name is unknown.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseQueryValueError {
    kind: &'static str,
    value: String,
}

impl ParseQueryValueError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Column the list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    #[default]
    Id,
    Text,
    CreatedAt,
    ModifiedAt,
    Published,
}

impl SortField {
    pub const ALL: [SortField; 5] = [
        SortField::Id,
        SortField::Text,
        SortField::CreatedAt,
        SortField::ModifiedAt,
        SortField::Published,
    ];

    /// Wire name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Text => "text",
            SortField::CreatedAt => "createdAt",
            SortField::ModifiedAt => "modifiedAt",
            SortField::Published => "published",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = ParseQueryValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept `createdAt`, `created_at` and `created-at` alike.
        let wanted = s.trim().replace(['_', '-'], "");
        Self::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| ParseQueryValueError::new("sort field", s))
    }
}

/// Ordering direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = ParseQueryValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(ParseQueryValueError::new("sort direction", s)),
        }
    }
}

/// Publication view selector.
///
/// `PendingOnly` is answered by the store. `PublishedOnly` is applied to the
/// loaded page only, so page totals still count unpublished rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PublicationFilter {
    #[default]
    All,
    PublishedOnly,
    PendingOnly,
}

impl PublicationFilter {
    /// Whether the store should restrict results to unpublished entries.
    pub fn pending_only(self) -> bool {
        matches!(self, PublicationFilter::PendingOnly)
    }

    /// Client-side filter applied to a loaded page.
    pub fn keeps(self, entry: &Entry) -> bool {
        match self {
            PublicationFilter::PublishedOnly => entry.published,
            PublicationFilter::All | PublicationFilter::PendingOnly => true,
        }
    }
}

impl FromStr for PublicationFilter {
    type Err = ParseQueryValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(PublicationFilter::All),
            "published" | "published-only" => Ok(PublicationFilter::PublishedOnly),
            "pending" | "pending-only" | "unpublished" => Ok(PublicationFilter::PendingOnly),
            _ => Err(ParseQueryValueError::new("publication filter", s)),
        }
    }
}

/// Parameters of one page fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub page_index: usize,
    pub page_size: usize,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    /// Trimmed search text; `None` means no text filter.
    pub free_text: Option<String>,
    pub pending_only: bool,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
            sort_field: SortField::default(),
            sort_direction: SortDirection::default(),
            free_text: None,
            pending_only: false,
        }
    }
}

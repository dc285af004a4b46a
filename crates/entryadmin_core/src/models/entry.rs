//! Entry model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Server-assigned entry identifier.
pub type EntryId = i64;

/// One administrable text item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: EntryId,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    pub published: bool,
}

impl Entry {
    /// Create an unpublished entry stamped with `now`.
    pub fn new(id: EntryId, text: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id,
            text: text.into(),
            created_at: now,
            modified_at: now,
            published: false,
        }
    }

    /// Copy with only the text replaced.
    ///
    /// Timestamps and the publication flag are carried over as-is; the store
    /// owns `modified_at`.
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..self.clone()
        }
    }

    /// Copy with the publication flag set to `published`.
    pub fn with_published(&self, published: bool) -> Self {
        Self {
            published,
            ..self.clone()
        }
    }
}

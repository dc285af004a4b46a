//! Entry text validation and normalization helpers.

use thiserror::Error;

use crate::constants::{ENTRY_TEXT_MAX_CHARS, ENTRY_TEXT_MIN_CHARS};

/// Reasons an entry text is rejected before it reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextError {
    #[error("text is required")]
    Empty,
    #[error("text must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },
    #[error("text must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },
}

/// Trim an optional string and drop empty values.
///
/// # Returns
/// `None` when the input is missing or whitespace-only; otherwise the trimmed
/// string.
pub fn normalize_optional_nonempty(value: Option<String>) -> Option<String> {
    value.and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Validate entry text for create/edit.
///
/// Length is measured in characters on the trimmed text.
///
/// # Returns
/// The trimmed text on success.
///
/// # Errors
/// Returns [`TextError`] when the text is blank, shorter than
/// [`ENTRY_TEXT_MIN_CHARS`], or longer than [`ENTRY_TEXT_MAX_CHARS`].
pub fn validate_entry_text(text: &str) -> Result<&str, TextError> {
    let trimmed = text.trim();
    let actual = trimmed.chars().count();
    if actual == 0 {
        return Err(TextError::Empty);
    }
    if actual < ENTRY_TEXT_MIN_CHARS {
        return Err(TextError::TooShort {
            min: ENTRY_TEXT_MIN_CHARS,
            actual,
        });
    }
    if actual > ENTRY_TEXT_MAX_CHARS {
        return Err(TextError::TooLong {
            max: ENTRY_TEXT_MAX_CHARS,
            actual,
        });
    }
    Ok(trimmed)
}

//! Application error types for the store and domain logic.
use thiserror::Error;

use crate::text::TextError;

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Storage error: {0}")]
    StorageMessage(String),

    #[error("Not found")]
    NotFound,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unavailable: {0}")]
    Unavailable(String),
}

impl From<TextError> for AppError {
    fn from(value: TextError) -> Self {
        Self::BadRequest(value.to_string())
    }
}

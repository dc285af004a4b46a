//! Core domain library for entryadmin (config, models, store contract).

/// Configuration loading and defaults.
pub mod config;
/// Shared constants used by the store and the controllers.
pub mod constants;
/// Application error types (store/domain).
pub mod error;
/// Data models exchanged between the store and the controllers.
pub mod models;
/// Page-button strip helpers.
pub mod pagination;
/// Fake phrase generator used by bulk population.
pub mod phrases;
/// Remote collaborator contract and the in-memory implementation.
pub mod store;
/// Entry text validation and normalization.
pub mod text;

pub use config::Config;
pub use constants::*;
pub use error::AppError;
pub use store::{EntryStore, MemoryStore};

//! Configuration loading from environment variables.

use serde::Deserialize;
use std::env;

use crate::constants::{
    ALLOWED_PAGE_SIZES, DEFAULT_PAGE_SIZE, DEFAULT_POPULATE_COUNT, DEFAULT_SEARCH_DEBOUNCE_MS,
    DEFAULT_TOAST_TTL_MS,
};

/// Runtime configuration for entryadmin.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    pub page_size: usize,
    pub search_debounce_ms: u64,
    pub toast_ttl_ms: u64,
    pub populate_count: usize,
    /// Seed for the fake phrase generator; `None` draws from entropy.
    pub seed: Option<u64>,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            toast_ttl_ms: DEFAULT_TOAST_TTL_MS,
            populate_count: DEFAULT_POPULATE_COUNT,
            seed: None,
            verbose: false,
        }
    }
}

/// Parse a boolean-like environment flag value.
///
/// # Supported Values
/// - Truthy: `1`, `true`, `yes`, `on`
/// - Falsy: `0`, `false`, `no`, `off`, empty string
///
/// Matching is case-insensitive and ignores surrounding whitespace.
///
/// # Returns
/// `Some(bool)` when the value is recognized, otherwise `None`.
pub fn parse_env_flag(value: &str) -> Option<bool> {
    let normalized = value.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Read a boolean flag from the environment.
///
/// Missing or unrecognized values are treated as `false`.
pub fn env_flag_enabled(name: &str) -> bool {
    env::var(name)
        .ok()
        .and_then(|value| parse_env_flag(&value))
        .unwrap_or(false)
}

fn parse_number<T: std::str::FromStr>(raw: Option<String>) -> Option<T> {
    raw.and_then(|value| value.trim().parse().ok())
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults applied when env vars are missing.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Unparseable numbers and page sizes outside [`ALLOWED_PAGE_SIZES`] fall
    /// back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let page_size = parse_number::<usize>(lookup("ENTRYADMIN_PAGE_SIZE"))
            .filter(|size| ALLOWED_PAGE_SIZES.contains(size))
            .unwrap_or(defaults.page_size);
        Self {
            page_size,
            search_debounce_ms: parse_number(lookup("ENTRYADMIN_SEARCH_DEBOUNCE_MS"))
                .unwrap_or(defaults.search_debounce_ms),
            toast_ttl_ms: parse_number(lookup("ENTRYADMIN_TOAST_TTL_MS"))
                .unwrap_or(defaults.toast_ttl_ms),
            populate_count: parse_number(lookup("ENTRYADMIN_POPULATE_COUNT"))
                .unwrap_or(defaults.populate_count),
            seed: parse_number(lookup("ENTRYADMIN_SEED")),
            verbose: lookup("ENTRYADMIN_VERBOSE")
                .and_then(|value| parse_env_flag(&value))
                .unwrap_or(false),
        }
    }
}

//! Application-level configuration constants.

use std::time::Duration;

// Remote statistics API
/// Base URL of the statistics API, baked in at build time from `F1_API_URL`.
/// Empty means "same origin as the page".
pub const API_URL_RAW: &str = match option_env!("F1_API_URL") {
    Some(url) => url,
    None => "",
};
pub const REQUEST_TIMEOUT_MS: u32 = 15_000;
pub const REQUESTED_WITH: &str = "XMLHttpRequest";

// Podium enrichment
pub const PODIUM_SIZE: usize = 3;
pub const PODIUM_BATCH_SIZE: usize = 3;
pub const PODIUM_BATCH_PAUSE_MS: u64 = 100;

// Preferences
pub const LANGUAGE_STORAGE_KEY: &str = "language";

// Logging
#[cfg(debug_assertions)]
pub const LOG_LEVEL: log::LevelFilter = log::LevelFilter::Debug;
#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

/// The API base URL without a trailing slash.
pub fn api_url() -> &'static str {
    API_URL_RAW.trim_end_matches('/')
}

pub fn podium_batch_pause() -> Duration {
    Duration::from_millis(PODIUM_BATCH_PAUSE_MS)
}

//! Configuration defaults
//!
//! Length constants used by the generators and the live-analysis debounce
//! read from the environment.

use std::time::Duration;

/// Default length of a generated password.
pub const DEFAULT_LENGTH: usize = 12;
/// Shortest length offered to end users. Not enforced by the generator.
pub const MIN_UI_LENGTH: usize = 6;
/// Longest length offered to end users. Not enforced by the generator.
pub const MAX_UI_LENGTH: usize = 64;

/// Environment variable overriding the live-analysis debounce, in milliseconds.
pub const DEBOUNCE_ENV: &str = "PWD_ANALYZE_DEBOUNCE_MS";
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Returns the debounce delay applied before live analysis.
///
/// Priority:
/// 1. Environment variable `PWD_ANALYZE_DEBOUNCE_MS`
/// 2. Default of 300ms
///
/// Values that do not parse as an unsigned integer fall back to the default.
pub fn get_debounce() -> Duration {
    let millis = match std::env::var(DEBOUNCE_ENV) {
        Ok(raw) => raw.trim().parse::<u64>().unwrap_or_else(|_e| {
            #[cfg(feature = "tracing")]
            tracing::warn!("Ignoring invalid {}={:?}: {}", DEBOUNCE_ENV, raw, _e);
            DEFAULT_DEBOUNCE_MS
        }),
        Err(_) => DEFAULT_DEBOUNCE_MS,
    };
    Duration::from_millis(millis)
}

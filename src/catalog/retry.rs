//! Bounded retry with exponential backoff for catalog fetches.

use std::time::Duration;

use super::error::CatalogError;

/// When and how long to wait before fetching the catalog again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, the first one included.
    pub max_attempts: u32,
    pub backoff_base: Duration,
    pub backoff_max: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_base: Duration::from_secs(1),
            backoff_max: Duration::from_secs(30),
        }
    }
}

impl RetryPolicy {
    /// Decide whether to try again after `attempts` failed attempts,
    /// the last of which failed with `error`.
    pub fn should_retry(&self, attempts: u32, error: &CatalogError) -> bool {
        !error.is_client_error() && attempts < self.max_attempts
    }

    /// Delay before attempt number `attempts + 1`.
    pub fn backoff(&self, attempts: u32) -> Duration {
        let exponent = attempts.saturating_sub(1).min(16);
        self.backoff_base
            .saturating_mul(1u32 << exponent)
            .min(self.backoff_max)
    }
}

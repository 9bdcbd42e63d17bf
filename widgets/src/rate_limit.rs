//! In-memory rate limiting for client-side form submissions.
//!
//! DESIGN
//! ======
//! Sliding-window attempt logs backed by `HashMap<String, VecDeque<f64>>`,
//! one log per key. A check prunes the key's log, counts what remains, and
//! records the attempt only when a slot is free. Pruning happens on that path
//! alone; there is no background sweep.
//!
//! TRADE-OFFS
//! ==========
//! State lives for the lifetime of the page and is never persisted. This is a
//! best-effort guard against accidental resubmission, not a security boundary.
//! Check and record happen under a single lock so two calls for the same key
//! can never both take the last slot.

#[cfg(test)]
#[path = "rate_limit_test.rs"]
mod rate_limit_test;

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use serde::Deserialize;

use crate::clock;

pub const DEFAULT_MAX_ATTEMPTS: usize = 5;
pub const DEFAULT_WINDOW_MS: u64 = 60_000;

/// Attempt policy for one kind of action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RateLimitConfig {
    pub max_attempts: usize,
    pub window_ms: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self { max_attempts: DEFAULT_MAX_ATTEMPTS, window_ms: DEFAULT_WINDOW_MS }
    }
}

// =============================================================================
// RATE LIMITER
// =============================================================================

#[derive(Clone, Default)]
pub struct RateLimiter {
    inner: Arc<Mutex<HashMap<String, VecDeque<f64>>>>,
}

impl RateLimiter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the attempt log for `key` and record this attempt if a slot is free.
    ///
    /// Returns `false` once `max_attempts` attempts already fall inside the
    /// last `window_ms` milliseconds.
    pub fn is_allowed(&self, key: &str, max_attempts: usize, window_ms: u64) -> bool {
        self.is_allowed_at(key, max_attempts, window_ms, clock::now_ms())
    }

    /// Same as [`Self::is_allowed`] using a policy struct.
    pub fn check(&self, key: &str, config: RateLimitConfig) -> bool {
        self.is_allowed(key, config.max_attempts, config.window_ms)
    }

    /// Check + record with an explicit timestamp in milliseconds.
    pub fn is_allowed_at(&self, key: &str, max_attempts: usize, window_ms: u64, now_ms: f64) -> bool {
        let mut logs = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let attempts = logs.entry(key.to_owned()).or_default();
        prune_window(attempts, now_ms, window_ms);

        if attempts.len() >= max_attempts {
            log::debug!("rate limit reached: key={key} attempts={} max={max_attempts}", attempts.len());
            return false;
        }

        attempts.push_back(now_ms);
        true
    }

    /// Forget every recorded attempt for `key`.
    pub fn reset(&self, key: &str) {
        let mut logs = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        logs.remove(key);
    }

    /// Number of attempts currently stored for `key`, as of the last check.
    ///
    /// Entries are only pruned by a check, so this can include expired ones.
    #[must_use]
    pub fn attempts(&self, key: &str) -> usize {
        let logs = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        logs.get(key).map_or(0, VecDeque::len)
    }
}

/// Process-wide limiter shared by every form on the page.
pub fn global() -> &'static RateLimiter {
    static GLOBAL: OnceLock<RateLimiter> = OnceLock::new();
    GLOBAL.get_or_init(RateLimiter::new)
}

// =============================================================================
// HELPERS
// =============================================================================

#[allow(clippy::cast_precision_loss)]
fn prune_window(attempts: &mut VecDeque<f64>, now_ms: f64, window_ms: u64) {
    let window_ms = window_ms as f64;
    while let Some(&front) = attempts.front() {
        if now_ms - front > window_ms {
            attempts.pop_front();
        } else {
            break;
        }
    }
}

//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::Duration;

use serde_json::Value;

// == Cache Entry ==
/// Represents a single cache entry with value and timing metadata.
///
/// Entries always carry an expiry; there is no "never expires" mode. The
/// entry does not read a clock itself, callers pass the current time so
/// every expiry decision goes through the store's injected clock.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload, opaque to the cache
    pub value: Value,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl` after `now_ms`.
    ///
    /// A zero `ttl` yields an entry that is already expired for every
    /// subsequent read.
    pub fn new(value: Value, now_ms: u64, ttl: Duration) -> Self {
        Self {
            value,
            created_at: now_ms,
            expires_at: now_ms + ttl.as_millis() as u64,
        }
    }

    // == Is Expired ==
    /// Checks whether the entry has expired as of `now_ms`.
    ///
    /// Boundary condition: the entry is visible only while the current
    /// time is strictly before `expires_at`; at `now_ms == expires_at`
    /// it is already expired.
    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms >= self.expires_at
    }

    // == Remaining ==
    /// Milliseconds until expiry as of `now_ms`.
    ///
    /// Signed: negative once the entry has expired but not yet been
    /// removed, which the diagnostic snapshot reports as-is.
    pub fn remaining_ms(&self, now_ms: u64) -> i64 {
        self.expires_at as i64 - now_ms as i64
    }

    // == Age ==
    /// Milliseconds since the entry was created, saturating at zero.
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.created_at)
    }
}

//! Cache Store Module
//!
//! Main cache engine: HashMap storage with TTL expiration, prefix
//! invalidation, and diagnostic snapshots. Expiry is both lazy (checked on
//! read) and active (the periodic cleanup sweep); both paths share the
//! same predicate.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::cache::{CacheEntry, CacheSnapshot, CacheStats, Clock, EntrySnapshot, SystemClock};
use crate::config::CacheConfig;

// == Cache Store ==
/// In-memory TTL cache mapping string keys to opaque JSON payloads.
///
/// The store is an explicitly constructed instance: share it across tasks
/// as a [`SharedCache`](crate::cache::SharedCache) rather than a global,
/// so tests can build isolated stores and control the clock.
///
/// Every operation is synchronous and infallible. A stale entry is simply
/// treated as a miss; callers fall back to the real read path and `set`
/// the fresh result.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Performance statistics
    stats: CacheStats,
    /// TTL applied when `set` is called without one
    default_ttl: Duration,
    /// Time source for all expiry decisions
    clock: Arc<dyn Clock>,
}

impl CacheStore {
    // == Constructors ==
    /// Creates a new CacheStore reading the system clock.
    ///
    /// # Arguments
    /// * `default_ttl` - TTL applied to entries stored without an explicit one
    pub fn new(default_ttl: Duration) -> Self {
        Self::with_clock(default_ttl, Arc::new(SystemClock))
    }

    /// Creates a new CacheStore with an injected clock.
    pub fn with_clock(default_ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            default_ttl,
            clock,
        }
    }

    /// Creates a new CacheStore from configuration.
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.default_ttl())
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns the value if present and unexpired, `None` otherwise. An
    /// expired entry found here is removed (lazy expiry). A miss and an
    /// expired read are indistinguishable to the caller; they differ only
    /// in the debug log.
    pub fn get(&mut self, key: &str) -> Option<Value> {
        let now_ms = self.clock.now_ms();

        if let Some(entry) = self.entries.get(key) {
            if entry.is_expired(now_ms) {
                debug!(key, "cache expired");
                self.entries.remove(key);
                self.stats.record_expirations(1);
                self.stats.record_miss();
                self.stats.set_total_entries(self.entries.len());
                return None;
            }

            debug!(key, "cache hit");
            let value = entry.value.clone();
            self.stats.record_hit();
            Some(value)
        } else {
            debug!(key, "cache miss");
            self.stats.record_miss();
            None
        }
    }

    // == Set ==
    /// Stores a value under `key` with expiry `now + ttl`.
    ///
    /// Overwrites any existing entry unconditionally; the TTL is reset, not
    /// merged. Uses the store's default TTL when `ttl` is `None`. A zero
    /// `ttl` stores an entry that is already expired for every subsequent
    /// `get`, which is valid if degenerate.
    pub fn set(&mut self, key: impl Into<String>, value: Value, ttl: Option<Duration>) {
        let key = key.into();
        let ttl = ttl.unwrap_or(self.default_ttl);
        let ttl_ms = ttl.as_millis() as u64;
        let entry = CacheEntry::new(value, self.clock.now_ms(), ttl);

        debug!(key = %key, ttl_ms, "cache set");
        self.entries.insert(key, entry);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Invalidate ==
    /// Removes the entry for `key` if present.
    ///
    /// Returns whether anything was removed; a second call for the same
    /// key returns `false`.
    pub fn invalidate(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            debug!(key, "cache invalidated");
            self.stats.set_total_entries(self.entries.len());
        }
        removed
    }

    // == Invalidate By Prefix ==
    /// Removes every entry whose key starts with `prefix`.
    ///
    /// Used after a write that stales a whole family of derived reads,
    /// e.g. every cached page of a filtered listing. Returns the number of
    /// entries removed; unrelated keys are untouched.
    pub fn invalidate_by_prefix(&mut self, prefix: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| !key.starts_with(prefix));
        let count = before - self.entries.len();

        if count > 0 {
            debug!(prefix, count, "cache invalidated by prefix");
            self.stats.set_total_entries(self.entries.len());
        }
        count
    }

    // == Clear ==
    /// Removes all entries unconditionally, expired or not.
    pub fn clear(&mut self) {
        let size = self.entries.len();
        self.entries.clear();
        self.stats.set_total_entries(0);
        debug!(removed = size, "cache cleared");
    }

    // == Cleanup ==
    /// Removes every entry whose expiry has passed.
    ///
    /// Active counterpart of the lazy check in `get`: bounds memory growth
    /// from entries nobody re-reads. Returns the number removed.
    pub fn cleanup(&mut self) -> usize {
        let now_ms = self.clock.now_ms();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now_ms));
        let count = before - self.entries.len();

        if count > 0 {
            debug!(count, "cache cleanup removed expired entries");
            self.stats.record_expirations(count as u64);
            self.stats.set_total_entries(self.entries.len());
        }
        count
    }

    // == Snapshot ==
    /// Returns a diagnostic snapshot of the current contents.
    ///
    /// Read-only: does not evict, so entries past their TTL may appear
    /// with a negative `expires_in_ms`.
    pub fn snapshot(&self) -> CacheSnapshot {
        let now_ms = self.clock.now_ms();

        CacheSnapshot {
            size: self.entries.len(),
            entries: self
                .entries
                .iter()
                .map(|(key, entry)| EntrySnapshot {
                    key: key.clone(),
                    expires_in_ms: entry.remaining_ms(now_ms),
                    age_ms: entry.age_ms(now_ms),
                })
                .collect(),
        }
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Returns the current number of entries, expired or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the TTL applied when `set` receives none.
    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }
}

//! Cache Statistics Module
//!
//! Tracks cache performance counters and provides a diagnostic snapshot of
//! the entries currently stored.

use serde::Serialize;

// == Cache Stats ==
/// Tracks cache performance metrics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of successful cache retrievals
    pub hits: u64,
    /// Number of failed cache retrievals (key not found or expired)
    pub misses: u64,
    /// Number of entries removed because their TTL elapsed, whether
    /// lazily on read or by a cleanup sweep
    pub expirations: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
}

impl CacheStats {
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no requests have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// Adds to the expiration counter.
    pub fn record_expirations(&mut self, count: u64) {
        self.expirations += count;
    }

    /// Updates the total entries count.
    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}

// == Entry Snapshot ==
/// Per-entry view in a diagnostic snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct EntrySnapshot {
    /// The cache key
    pub key: String,
    /// Milliseconds until expiry; negative if expired but not yet removed
    pub expires_in_ms: i64,
    /// Milliseconds since the entry was stored
    pub age_ms: u64,
}

// == Cache Snapshot ==
/// Point-in-time diagnostic view of the cache contents.
///
/// Read-only; taking a snapshot has no side effects and does not evict
/// expired entries, so an entry past its TTL may still appear here with a
/// negative `expires_in_ms`.
#[derive(Debug, Clone, Serialize)]
pub struct CacheSnapshot {
    /// Number of entries currently stored, expired or not
    pub size: usize,
    /// One record per stored entry
    pub entries: Vec<EntrySnapshot>,
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = CacheStats::new();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.expirations, 0);
        assert_eq!(stats.total_entries, 0);
    }

    #[test]
    fn test_hit_rate_no_requests() {
        let stats = CacheStats::new();
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_miss();
        assert_eq!(stats.hit_rate(), 0.5);
    }

    #[test]
    fn test_record_expirations() {
        let mut stats = CacheStats::new();
        stats.record_expirations(3);
        stats.record_expirations(1);
        assert_eq!(stats.expirations, 4);
    }

    #[test]
    fn test_snapshot_serialize() {
        let snapshot = CacheSnapshot {
            size: 1,
            entries: vec![EntrySnapshot {
                key: "annonces:{}".to_string(),
                expires_in_ms: -20,
                age_ms: 320,
            }],
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains(r#""size":1"#));
        assert!(json.contains(r#""expires_in_ms":-20"#));
        assert!(json.contains("annonces"));
    }
}

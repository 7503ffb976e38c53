//! Cache Module
//!
//! Provides in-memory caching with TTL expiration, prefix invalidation,
//! and deterministic key derivation.

mod clock;
mod entry;
mod key;
mod stats;
mod store;


use std::sync::Arc;

use tokio::sync::RwLock;

// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use key::generate_key;
pub use stats::{CacheSnapshot, CacheStats, EntrySnapshot};
pub use store::CacheStore;

// == Shared Cache ==
/// Handle to a cache store shared across tasks.
///
/// The store itself is single-writer; sharing goes through a `tokio`
/// `RwLock` so the cleanup task and request paths can hold the same
/// instance. Pass this handle to whichever components need the cache
/// instead of reaching for a global.
pub type SharedCache = Arc<RwLock<CacheStore>>;

/// Wraps a store into a [`SharedCache`] handle.
pub fn shared(store: CacheStore) -> SharedCache {
    Arc::new(RwLock::new(store))
}

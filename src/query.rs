//! Cached Query Helper
//!
//! Packages the canonical call-site sequence around the cache: build a
//! key, try the cache, on a miss perform the real read and store the
//! result. Callers that need finer control can drive the store directly.

use std::future::Future;
use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::cache::SharedCache;
use crate::error::{QueryError, Result};

// == Query Options ==
/// Options controlling a single cached query.
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    /// TTL for the stored result; the store's default when `None`
    pub ttl: Option<Duration>,
    /// Skip the cache read and always fetch; the fresh result is still stored
    pub refetch: bool,
}

impl QueryOptions {
    /// Options with an explicit TTL.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl: Some(ttl),
            ..Self::default()
        }
    }

    /// Options that force a fetch while still refreshing the cache.
    pub fn refetch() -> Self {
        Self {
            refetch: true,
            ..Self::default()
        }
    }
}

// == Cached Query ==
/// Runs `fetch` through the cache.
///
/// On a hit the backend read is skipped entirely. On a miss, `fetch` runs
/// with no lock held and its result is stored under `key` before being
/// returned. A fetch error is propagated and nothing is cached, so the
/// next caller retries the real read.
///
/// The read-fetch-store sequence is not atomic: two callers missing on the
/// same key may both fetch, and the last `set` wins. The cache optimizes
/// repeat reads, not stampedes.
pub async fn cached_query<F, Fut>(
    cache: &SharedCache,
    key: &str,
    options: QueryOptions,
    fetch: F,
) -> Result<Value>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = std::result::Result<Value, anyhow::Error>>,
{
    if !options.refetch {
        // get() needs the write lock: a lazy expiry mutates the store.
        let mut store = cache.write().await;
        if let Some(value) = store.get(key) {
            return Ok(value);
        }
    }

    debug!(key, "fetching from backend");
    let value = fetch().await.map_err(QueryError::Backend)?;

    {
        let mut store = cache.write().await;
        store.set(key, value.clone(), options.ttl);
    }

    Ok(value)
}

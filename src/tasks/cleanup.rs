//! TTL Cleanup Task
//!
//! Background task that periodically removes expired cache entries.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::SharedCache;

/// Spawns a background task that periodically sweeps expired entries.
///
/// The task loops forever, sleeping for `interval` between sweeps; each
/// sweep takes the write lock just long enough to run `cleanup`. This is
/// the active half of expiry: it frees entries nobody re-reads (and thus
/// never lazily evicts via `get`).
///
/// # Arguments
/// * `cache` - Shared cache handle
/// * `interval` - Time between cleanup sweeps
///
/// # Returns
/// A JoinHandle for the spawned task; abort it at shutdown.
///
/// # Example
/// ```ignore
/// let cache = shared(CacheStore::from_config(&config));
/// let cleanup_handle = spawn_cleanup_task(cache.clone(), config.cleanup_interval());
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task(cache: SharedCache, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(interval_secs = interval.as_secs(), "starting TTL cleanup task");

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut store = cache.write().await;
                store.cleanup()
            };

            if removed > 0 {
                info!(removed, "TTL cleanup removed expired entries");
            } else {
                debug!("TTL cleanup found no expired entries");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{shared, CacheStore, ManualClock};
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_cleanup_task_removes_expired_entries() {
        let clock = ManualClock::new(0);
        let cache = shared(CacheStore::with_clock(
            Duration::from_secs(300),
            Arc::new(clock.clone()),
        ));

        cache
            .write()
            .await
            .set("expire_soon", json!("value"), Some(Duration::from_millis(10)));

        // Entry is past its TTL but nobody reads it; only the sweep frees it.
        clock.advance(Duration::from_millis(50));
        let handle = spawn_cleanup_task(cache.clone(), Duration::from_millis(20));

        tokio::time::sleep(Duration::from_millis(100)).await;

        assert!(cache.read().await.is_empty());
        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_preserves_valid_entries() {
        let clock = ManualClock::new(0);
        let cache = shared(CacheStore::with_clock(
            Duration::from_secs(300),
            Arc::new(clock.clone()),
        ));

        cache
            .write()
            .await
            .set("long_lived", json!("value"), Some(Duration::from_secs(3600)));

        let handle = spawn_cleanup_task(cache.clone(), Duration::from_millis(20));
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(
            cache.write().await.get("long_lived"),
            Some(json!("value"))
        );
        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let cache = shared(CacheStore::new(Duration::from_secs(300)));

        let handle = spawn_cleanup_task(cache, Duration::from_millis(20));
        handle.abort();

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}

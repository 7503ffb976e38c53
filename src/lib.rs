//! mboa-cache - In-memory TTL cache for the MBOA PLACE marketplace client
//!
//! Best-effort, time-bounded memoization over idempotent backend reads:
//! repeated requests for the same logical data within a time window are
//! served from memory instead of re-issuing the read. Supports lazy expiry
//! on access, an active background sweep, and bulk invalidation by key
//! prefix after writes.

pub mod cache;
pub mod config;
pub mod error;
pub mod query;
pub mod tasks;

pub use cache::{generate_key, shared, CacheSnapshot, CacheStats, CacheStore, SharedCache};
pub use config::CacheConfig;
pub use error::QueryError;
pub use query::{cached_query, QueryOptions};
pub use tasks::spawn_cleanup_task;

//! Error types for the cached query layer
//!
//! The cache itself is infallible by contract; errors only arise from the
//! backend reads that populate it.

use thiserror::Error;

// == Query Error Enum ==
/// Errors surfaced by [`cached_query`](crate::query::cached_query).
#[derive(Error, Debug)]
pub enum QueryError {
    /// The underlying backend read failed; nothing was cached.
    #[error("backend query failed: {0}")]
    Backend(#[from] anyhow::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the query layer.
pub type Result<T> = std::result::Result<T, QueryError>;

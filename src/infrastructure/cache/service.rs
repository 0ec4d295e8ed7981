//! Cache service trait and result types.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during cache operations.
///
/// These never cross the resolver boundary: the cache is strictly advisory,
/// and every failure degrades to a store lookup.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    Connection(String),
    #[error("Cache operation error: {0}")]
    Operation(String),
}

/// Result type for cache write operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Outcome of a cache read.
///
/// A missing key is an expected state, not an error, so it gets its own
/// variant; `Miss` and `ReadError` both route the caller to the store, but
/// only `ReadError` is worth logging.
#[derive(Debug)]
pub enum CacheLookup {
    /// The key exists; payload is the serialized resource.
    Hit(String),
    /// The key does not exist or has expired.
    Miss,
    /// The read itself failed (connectivity, protocol, type mismatch).
    ReadError(CacheError),
}

/// Trait for caching serialized user resources.
///
/// Implementations must be thread-safe and handle errors gracefully without
/// disrupting the application (cache failures degrade to database lookups).
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves the serialized payload stored under `key`.
    ///
    /// Never fails from the caller's perspective: errors are reported as
    /// [`CacheLookup::ReadError`] and handled by falling through to the store.
    async fn get(&self, key: &str) -> CacheLookup;

    /// Stores a serialized payload under `key` with the given TTL.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] on write failure. Callers log the error and
    /// continue; a failed write must never fail a resolution.
    async fn set(&self, key: &str, payload: &str, ttl_seconds: u64) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    ///
    /// Used by the health endpoint to report cache status.
    async fn health_check(&self) -> bool;
}

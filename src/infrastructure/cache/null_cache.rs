//! No-op cache implementation for testing or disabled caching.

use super::service::{CacheLookup, CacheResult, CacheService};
use async_trait::async_trait;
use tracing::debug;

/// A cache implementation that does nothing.
///
/// Used when Redis is unavailable or caching is explicitly disabled.
/// Every read is a miss and every write succeeds without storing anything,
/// so every resolution goes straight to the store.
///
/// # Use Cases
///
/// - Development environments without Redis
/// - Testing scenarios where caching should be bypassed
/// - Fallback when the Redis connection fails at startup
pub struct NullCache;

impl NullCache {
    /// Creates a new NullCache instance.
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheService for NullCache {
    async fn get(&self, _key: &str) -> CacheLookup {
        CacheLookup::Miss
    }

    async fn set(&self, _key: &str, _payload: &str, _ttl_seconds: u64) -> CacheResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

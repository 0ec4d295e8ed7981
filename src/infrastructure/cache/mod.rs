//! Caching layer for user resource payloads.
//!
//! Provides a [`CacheService`] trait with two implementations:
//! - [`RedisCache`] - Production Redis-backed cache
//! - [`NullCache`] - No-op implementation for testing/disabled caching
//!
//! Reads return a tagged [`CacheLookup`] so callers can route a miss and a
//! read error down the same store-fallback path while logging only the latter.

mod null_cache;
mod redis_cache;
mod service;

pub use null_cache::NullCache;
pub use redis_cache::RedisCache;
pub use service::{CacheError, CacheLookup, CacheResult, CacheService};

#[cfg(test)]
pub use service::MockCacheService;

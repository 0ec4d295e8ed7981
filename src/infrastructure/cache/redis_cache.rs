//! Redis-backed cache implementation.

use super::service::{CacheError, CacheLookup, CacheResult, CacheService};
use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands, Client};
use tracing::{debug, info, warn};

/// Redis cache for serialized user resources.
///
/// Uses connection pooling via `ConnectionManager` for efficient connection
/// reuse. Reads are fail-open: errors surface as [`CacheLookup::ReadError`]
/// and the caller falls back to the store.
pub struct RedisCache {
    client: ConnectionManager,
}

impl RedisCache {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Connection`] if the URL is invalid, the connection
    /// cannot be established, or the PING health check fails.
    pub async fn connect(redis_url: &str) -> CacheResult<Self> {
        info!("Connecting to Redis at {}", redis_url);

        let client = Client::open(redis_url).map_err(|e| {
            CacheError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| CacheError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self { client: manager })
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get(&self, key: &str) -> CacheLookup {
        let mut conn = self.client.clone();

        match conn.get::<_, Option<String>>(key).await {
            Ok(Some(payload)) => {
                debug!("Cache HIT: {}", key);
                CacheLookup::Hit(payload)
            }
            Ok(None) => {
                debug!("Cache MISS: {}", key);
                CacheLookup::Miss
            }
            Err(e) => CacheLookup::ReadError(CacheError::Operation(format!(
                "Redis GET failed for {}: {}",
                key, e
            ))),
        }
    }

    async fn set(&self, key: &str, payload: &str, ttl_seconds: u64) -> CacheResult<()> {
        let mut conn = self.client.clone();

        match conn.set_ex::<_, _, ()>(key, payload, ttl_seconds).await {
            Ok(_) => {
                debug!("Cache SET: {} (TTL: {}s)", key, ttl_seconds);
                Ok(())
            }
            Err(e) => {
                warn!("Redis SET error for {}: {}", key, e);
                Err(CacheError::Operation(e.to_string()))
            }
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}

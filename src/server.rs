//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, cache setup, and Axum server lifecycle.

use crate::application::services::UserDetailService;
use crate::config::Config;
use crate::infrastructure::cache::{CacheService, NullCache, RedisCache};
use crate::infrastructure::persistence::PgUserRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::extract::Request;
use axum::ServiceExt;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Migrations
/// - Redis cache (or NullCache fallback)
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let cache: Arc<dyn CacheService> = if let Some(redis_url) = &config.redis_url {
        match RedisCache::connect(redis_url).await {
            Ok(redis) => {
                tracing::info!("Cache enabled (Redis)");
                Arc::new(redis)
            }
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Using NullCache.", e);
                Arc::new(NullCache::new())
            }
        }
    } else {
        tracing::info!("Cache disabled (NullCache)");
        Arc::new(NullCache::new())
    };

    let repository = Arc::new(PgUserRepository::new(Arc::new(pool)));

    let user_detail_service = Arc::new(UserDetailService::new(
        repository.clone(),
        cache.clone(),
        config.cache_ttl_seconds,
        Duration::from_millis(config.request_timeout_ms),
        config.is_cache_enabled(),
    ));

    let state = AppState::new(user_detail_service, repository, cache);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when the process receives SIGINT.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to install shutdown signal handler: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}

//! User detail aggregation service.
//!
//! The heart of the crate: per request, the three user resources are
//! resolved concurrently under one shared deadline, each through a
//! cache-aside path, and either merged into a [`UserDetail`] or collapsed
//! into the full list of collected errors.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use metrics::{counter, histogram};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use tokio::time::error::Elapsed;
use tokio::time::{timeout_at, Instant};
use tracing::{debug, warn};

use crate::domain::entities::UserDetail;
use crate::domain::repositories::UserRepository;
use crate::domain::ResourceKind;
use crate::error::{AggregateError, AppError};
use crate::infrastructure::cache::{CacheLookup, CacheService};

/// Aggregates the user detail view from three independent resolutions.
///
/// # Concurrency
///
/// The three resolutions run as concurrent futures joined with
/// `tokio::join!`, a barrier rather than a race. Each future writes exactly one
/// result slot, read only after the join, so no locking is needed. A slow
/// resource delays the whole response up to the shared deadline; siblings
/// are not cancelled when one fails.
///
/// # Cache-aside
///
/// Each resolution checks the cache first, falls through to PostgreSQL on
/// miss (or on any cache trouble), and repopulates the cache best-effort.
/// Cache failures are logged and never surface to the caller.
///
/// # Failure composition
///
/// If any resolution fails, every collected error is returned and partial
/// successes are discarded; there is no partial aggregate path.
pub struct UserDetailService {
    repository: Arc<dyn UserRepository>,
    cache: Arc<dyn CacheService>,
    cache_ttl_seconds: u64,
    request_timeout: Duration,
    use_cache: bool,
}

impl UserDetailService {
    /// Creates a new aggregation service.
    ///
    /// # Arguments
    ///
    /// - `repository` - the store gateway for the three lookups
    /// - `cache` - the cache gateway ([`crate::infrastructure::cache::NullCache`]
    ///   when caching is disabled)
    /// - `cache_ttl_seconds` - TTL applied when repopulating the cache
    /// - `request_timeout` - shared deadline for the three resolutions
    /// - `use_cache` - when false, every resolution skips the cache path
    pub fn new(
        repository: Arc<dyn UserRepository>,
        cache: Arc<dyn CacheService>,
        cache_ttl_seconds: u64,
        request_timeout: Duration,
        use_cache: bool,
    ) -> Self {
        Self {
            repository,
            cache,
            cache_ttl_seconds,
            request_timeout,
            use_cache,
        }
    }

    /// Resolves the full user detail for `user_id`.
    ///
    /// Launches the profile, family, and transportation resolutions
    /// concurrently, bound to one deadline computed at entry. After all
    /// three complete (or time out), returns the merged aggregate, or an
    /// [`AggregateError`] carrying every collected error. Error order
    /// follows the result slots; callers must rely on membership only.
    pub async fn get_user_detail(&self, user_id: i64) -> Result<UserDetail, AggregateError> {
        let started = Instant::now();
        let deadline = started + self.request_timeout;
        let use_cache = self.use_cache;

        let (profile, family, transportation) = tokio::join!(
            timeout_at(deadline, async {
                let resolved = self
                    .resolve(ResourceKind::Profile, user_id, use_cache, || {
                        self.repository.find_profile(user_id)
                    })
                    .await;
                debug!(
                    user_id,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "profile resolution finished"
                );
                resolved
            }),
            timeout_at(deadline, async {
                let resolved = self
                    .resolve(ResourceKind::Family, user_id, use_cache, || {
                        self.repository.list_family(user_id)
                    })
                    .await;
                debug!(
                    user_id,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "family resolution finished"
                );
                resolved
            }),
            timeout_at(deadline, async {
                let resolved = self
                    .resolve(ResourceKind::Transportation, user_id, use_cache, || {
                        self.repository.list_transportation(user_id)
                    })
                    .await;
                debug!(
                    user_id,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "transportation resolution finished"
                );
                resolved
            }),
        );

        let mut errors = Vec::new();
        let profile = Self::take_slot(ResourceKind::Profile, user_id, profile, &mut errors);
        let family = Self::take_slot(ResourceKind::Family, user_id, family, &mut errors);
        let transportation = Self::take_slot(
            ResourceKind::Transportation,
            user_id,
            transportation,
            &mut errors,
        );

        let elapsed_ms = started.elapsed().as_millis() as u64;
        histogram!("user_detail_request_duration_ms").record(elapsed_ms as f64);
        debug!(user_id, elapsed_ms, "user detail aggregation finished");

        match (profile, family, transportation) {
            (Some(profile), Some(family), Some(transportation)) if errors.is_empty() => {
                Ok(UserDetail {
                    profile,
                    family,
                    transportation,
                })
            }
            _ => Err(AggregateError::new(errors)),
        }
    }

    /// Unpacks one joined result slot, converting deadline expiry into a
    /// [`AppError::DeadlineExceeded`] entry.
    fn take_slot<T>(
        kind: ResourceKind,
        user_id: i64,
        outcome: Result<Result<T, AppError>, Elapsed>,
        errors: &mut Vec<AppError>,
    ) -> Option<T> {
        match outcome {
            Ok(Ok(value)) => Some(value),
            Ok(Err(e)) => {
                errors.push(e);
                None
            }
            Err(_) => {
                errors.push(AppError::deadline_exceeded(
                    format!("Resolving user {} timed out", kind),
                    json!({ "resource": kind.as_str(), "user_id": user_id }),
                ));
                None
            }
        }
    }

    /// Cache-aside resolution of one resource kind.
    ///
    /// 1. With `use_cache`, read the cache: a hit that decodes returns
    ///    immediately; a miss, a read error, or a decode failure all fall
    ///    through to the store (only the failures are logged).
    /// 2. Run `fetch` against the store; a store error is returned as-is.
    /// 3. With `use_cache`, serialize the fresh value and write it back
    ///    under the same key. A write failure is logged and ignored.
    ///
    /// The store query and the cache write are not atomic; concurrent
    /// callers can observe a miss in that window.
    async fn resolve<T, F, Fut>(
        &self,
        kind: ResourceKind,
        user_id: i64,
        use_cache: bool,
        fetch: F,
    ) -> Result<T, AppError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, AppError>>,
    {
        let key = kind.cache_key(user_id);

        if use_cache {
            match self.cache.get(&key).await {
                CacheLookup::Hit(payload) => match serde_json::from_str::<T>(&payload) {
                    Ok(value) => {
                        counter!(
                            "user_detail_cache_lookups_total",
                            "resource" => kind.as_str(),
                            "outcome" => "hit"
                        )
                        .increment(1);
                        return Ok(value);
                    }
                    Err(e) => {
                        counter!(
                            "user_detail_cache_lookups_total",
                            "resource" => kind.as_str(),
                            "outcome" => "decode_error"
                        )
                        .increment(1);
                        warn!("failed to decode cached {} payload for {}: {}", kind, key, e);
                    }
                },
                CacheLookup::Miss => {
                    counter!(
                        "user_detail_cache_lookups_total",
                        "resource" => kind.as_str(),
                        "outcome" => "miss"
                    )
                    .increment(1);
                }
                CacheLookup::ReadError(e) => {
                    counter!(
                        "user_detail_cache_lookups_total",
                        "resource" => kind.as_str(),
                        "outcome" => "read_error"
                    )
                    .increment(1);
                    warn!("cache read failed for {}: {}", key, e);
                }
            }
        }

        let value = fetch().await?;

        if use_cache {
            match serde_json::to_string(&value) {
                Ok(payload) => {
                    if let Err(e) = self.cache.set(&key, &payload, self.cache_ttl_seconds).await {
                        warn!("failed to cache {} payload for {}: {}", kind, key, e);
                    }
                }
                Err(e) => {
                    warn!("failed to serialize {} payload for {}: {}", kind, key, e);
                }
            }
        }

        Ok(value)
    }
}

//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::UserDetailService;
use crate::domain::repositories::UserRepository;
use crate::infrastructure::cache::CacheService;

/// Application state shared across all request handlers.
///
/// The repository and cache handles are kept alongside the aggregation
/// service so the health endpoint can probe them directly.
#[derive(Clone)]
pub struct AppState {
    pub user_detail_service: Arc<UserDetailService>,
    pub user_repository: Arc<dyn UserRepository>,
    pub cache: Arc<dyn CacheService>,
}

impl AppState {
    /// Creates the shared state.
    pub fn new(
        user_detail_service: Arc<UserDetailService>,
        user_repository: Arc<dyn UserRepository>,
        cache: Arc<dyn CacheService>,
    ) -> Self {
        Self {
            user_detail_service,
            user_repository,
            cache,
        }
    }
}

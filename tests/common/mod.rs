#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use user_detail::application::services::UserDetailService;
use user_detail::domain::entities::{FamilyMember, UserProfile, Vehicle};
use user_detail::domain::repositories::UserRepository;
use user_detail::error::AppError;
use user_detail::infrastructure::cache::NullCache;
use user_detail::state::AppState;

/// Store stub with a fixed dataset for user `1001` and an optional
/// fail-everything mode for error-path tests.
pub struct StubUserRepository {
    pub fail: bool,
}

impl StubUserRepository {
    pub fn healthy() -> Arc<Self> {
        Arc::new(Self { fail: false })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self { fail: true })
    }
}

#[async_trait]
impl UserRepository for StubUserRepository {
    async fn find_profile(&self, user_id: i64) -> Result<UserProfile, AppError> {
        if self.fail {
            return Err(AppError::store_unavailable(
                "user_profile query failed",
                json!({}),
            ));
        }

        if user_id == 1001 {
            Ok(UserProfile {
                id: 1001,
                name: "Alice".to_string(),
                address: "12 Elm St".to_string(),
                gender: "F".to_string(),
            })
        } else {
            Ok(UserProfile::default())
        }
    }

    async fn list_family(&self, user_id: i64) -> Result<Vec<FamilyMember>, AppError> {
        if self.fail {
            return Err(AppError::store_unavailable(
                "user_family query failed",
                json!({}),
            ));
        }

        if user_id == 1001 {
            Ok(vec![FamilyMember {
                user_id: 1001,
                name: "Bob".to_string(),
                relation: "spouse".to_string(),
            }])
        } else {
            Ok(vec![])
        }
    }

    async fn list_transportation(&self, _user_id: i64) -> Result<Vec<Vehicle>, AppError> {
        if self.fail {
            return Err(AppError::store_unavailable(
                "user_transportation query failed",
                json!({}),
            ));
        }

        Ok(vec![])
    }

    async fn ping(&self) -> Result<(), AppError> {
        if self.fail {
            return Err(AppError::store_unavailable("connection refused", json!({})));
        }

        Ok(())
    }
}

/// Builds an [`AppState`] over the given repository with caching disabled.
pub fn create_test_state(repository: Arc<dyn UserRepository>) -> AppState {
    let cache = Arc::new(NullCache::new());

    let user_detail_service = Arc::new(UserDetailService::new(
        repository.clone(),
        cache.clone(),
        60,
        Duration::from_secs(2),
        false,
    ));

    AppState::new(user_detail_service, repository, cache)
}

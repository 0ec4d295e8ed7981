//! Repository trait for user resource data access.

use crate::domain::entities::{FamilyMember, UserProfile, Vehicle};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the three user resource lookups.
///
/// Each method is one independent parameterized lookup against the
/// relational store; the aggregator runs them concurrently, so
/// implementations must be safe for concurrent use.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetches the profile row for a user.
    ///
    /// # Returns
    ///
    /// The profile, or the zero-value record when no row exists; a missing
    /// profile is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on connectivity or query errors.
    async fn find_profile(&self, user_id: i64) -> Result<UserProfile, AppError>;

    /// Fetches all family rows for a user, in store iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on connectivity or query errors.
    async fn list_family(&self, user_id: i64) -> Result<Vec<FamilyMember>, AppError>;

    /// Fetches all transportation rows for a user, in store iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on connectivity or query errors.
    async fn list_transportation(&self, user_id: i64) -> Result<Vec<Vehicle>, AppError>;

    /// Store liveness check, used before queries and by the health endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] when the store is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}

//! PostgreSQL implementation of the user repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use tracing::error;

use crate::domain::entities::{FamilyMember, UserProfile, Vehicle};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// PostgreSQL repository for the three user resource tables.
///
/// Uses SQLx bound parameters for SQL injection protection. Each lookup is
/// preceded by a connection liveness check, and rows are returned in store
/// iteration order (`ORDER BY id`).
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_profile(&self, user_id: i64) -> Result<UserProfile, AppError> {
        self.ping().await?;

        let row = sqlx::query_as::<_, UserProfile>(
            r#"
            SELECT
                id,
                name,
                address,
                gender
            FROM
                user_profile
            WHERE
                id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| {
            error!("failed to query table user_profile: {}", e);
            AppError::from(e)
        })?;

        // A user without a profile row resolves to the zero-value record.
        Ok(row.unwrap_or_default())
    }

    async fn list_family(&self, user_id: i64) -> Result<Vec<FamilyMember>, AppError> {
        self.ping().await?;

        let rows = sqlx::query_as::<_, FamilyMember>(
            r#"
            SELECT
                user_id,
                name,
                relation
            FROM
                user_family
            WHERE
                user_id = $1
            ORDER BY
                id
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(|e| {
            error!("failed to query table user_family: {}", e);
            AppError::from(e)
        })?;

        Ok(rows)
    }

    async fn list_transportation(&self, user_id: i64) -> Result<Vec<Vehicle>, AppError> {
        self.ping().await?;

        let rows = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT
                user_id,
                name,
                type,
                colour
            FROM
                user_transportation
            WHERE
                user_id = $1
            ORDER BY
                id
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(|e| {
            error!("failed to query table user_transportation: {}", e);
            AppError::from(e)
        })?;

        Ok(rows)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;
        Ok(())
    }
}

//! User profile entity.

use serde::{Deserialize, Serialize};

/// A user's profile record, singleton per user.
///
/// A user with no `user_profile` row resolves to the zero-value record
/// rather than an error; callers cannot distinguish "no profile" from an
/// all-empty profile. This mirrors the documented store behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub gender: String,
}

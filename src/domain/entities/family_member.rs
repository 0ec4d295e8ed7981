//! Family member entity.

use serde::{Deserialize, Serialize};

/// One family row belonging to a user. A user can have zero or more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct FamilyMember {
    pub user_id: i64,
    pub name: String,
    pub relation: String,
}

//! Transportation (vehicle) entity.

use serde::{Deserialize, Serialize};

/// One transportation row belonging to a user. A user can have zero or more.
///
/// The backing column and the wire field are both named `type`; the Rust
/// field is `vehicle_type` to avoid the keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Vehicle {
    pub user_id: i64,
    pub name: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub vehicle_type: String,
    pub colour: String,
}

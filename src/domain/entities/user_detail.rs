//! The merged user detail aggregate.

use serde::{Deserialize, Serialize};

use super::{FamilyMember, UserProfile, Vehicle};

/// The full user detail view: profile plus family and transportation rows.
///
/// Assembled only when all three resolutions succeed; there is no partially
/// populated variant. Top-level JSON keys are PascalCase
/// (`Profile` / `Family` / `Transportation`), nested fields snake_case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserDetail {
    pub profile: UserProfile,
    pub family: Vec<FamilyMember>,
    pub transportation: Vec<Vehicle>,
}

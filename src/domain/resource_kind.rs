//! The three independent sub-resources composing a user detail.

use std::fmt;

/// One of the three sub-resources aggregated into a user detail.
///
/// Each kind owns a deterministic cache-key template and maps to one
/// PostgreSQL table. The aggregator resolves all three kinds concurrently;
/// they carry no ordering relationship to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Profile,
    Family,
    Transportation,
}

impl ResourceKind {
    /// Cache key namespace prefix, matching the backing table name.
    pub fn key_prefix(&self) -> &'static str {
        match self {
            Self::Profile => "user_profile",
            Self::Family => "user_family",
            Self::Transportation => "user_transportation",
        }
    }

    /// Builds the full cache key for a user, e.g. `user_profile:id:1001`.
    pub fn cache_key(&self, user_id: i64) -> String {
        format!("{}:id:{}", self.key_prefix(), user_id)
    }

    /// Short label used in logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Family => "family",
            Self::Transportation => "transportation",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

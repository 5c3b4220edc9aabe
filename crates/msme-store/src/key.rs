//! Logical entities the stack persists.

use serde::{Deserialize, Serialize};

/// A persisted entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKey {
    /// The most recent compliance check.
    LatestCheck,
    /// Past compliance checks, newest first.
    CheckHistory,
}

impl EntityKey {
    /// Every persisted entity.
    pub fn all() -> &'static [EntityKey] {
        &[Self::LatestCheck, Self::CheckHistory]
    }

    /// Namespaced storage name. Also the file stem for [`crate::FileStore`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LatestCheck => "compliance.latest_check",
            Self::CheckHistory => "compliance.check_history",
        }
    }
}

impl std::fmt::Display for EntityKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

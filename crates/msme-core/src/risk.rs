//! # Risk Levels
//!
//! Ordinal severity attached to every compliance finding.
//!
//! Ordering: `Critical < High < Medium < Low` under `Ord`, so an ascending
//! sort lists the most severe findings first. Use [`RiskLevel::severity`]
//! when a numeric "bigger is worse" score is needed.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

/// Severity of non-compliance with an obligation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Immediate statutory exposure (prosecution, audit, heavy penalty).
    Critical,
    /// Significant monetary penalty.
    High,
    /// Moderate, state-variable penalty.
    Medium,
    /// Minor recurring fine.
    Low,
}

impl RiskLevel {
    /// All risk levels, most severe first.
    pub fn all() -> &'static [RiskLevel] {
        &[Self::Critical, Self::High, Self::Medium, Self::Low]
    }

    /// Display label, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Numeric severity: 4 for `Critical` down to 1 for `Low`.
    pub fn severity(&self) -> u8 {
        match self {
            Self::Critical => 4,
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = ValidationError;

    /// Parse a risk level, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RiskLevel::all()
            .iter()
            .copied()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownRiskLevel(s.to_string()))
    }
}

//! # Compliance Finding
//!
//! One applicable obligation, as produced by the rule engine. Findings are
//! pure output: built fresh per evaluation, never mutated, no identity.

use serde::{Deserialize, Serialize};

use crate::obligation::Obligation;
use crate::risk::RiskLevel;

/// An obligation that applies to a business profile, with its context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceFinding {
    /// Which obligation was triggered.
    pub obligation: Obligation,
    /// Finding name, e.g. "GST Registration".
    pub name: String,
    /// Why it applies, quoting the triggering input value.
    pub reason: String,
    /// Filing or registration deadline.
    pub deadline: String,
    /// Severity of non-compliance.
    pub risk_level: RiskLevel,
    /// Consequence of non-compliance.
    pub penalty: String,
    /// Plain-language rationale.
    pub explanation: String,
    /// Statute and section.
    pub law: String,
}

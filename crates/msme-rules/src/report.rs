//! # Check Reports
//!
//! Summaries built on top of raw findings: per-risk counts, the highest
//! level present, and the one-line message shown to users.

use serde::{Deserialize, Serialize};

use msme_core::{BusinessProfile, ComplianceFinding, Obligation, RiskLevel};

/// Counts of findings per risk level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FindingSummary {
    pub total: usize,
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    /// Most severe level among the findings; `None` when nothing applies.
    pub highest: Option<RiskLevel>,
}

impl FindingSummary {
    /// Tally `findings`.
    pub fn from_findings(findings: &[ComplianceFinding]) -> Self {
        let mut summary = Self {
            total: findings.len(),
            ..Self::default()
        };
        for finding in findings {
            match finding.risk_level {
                RiskLevel::Critical => summary.critical += 1,
                RiskLevel::High => summary.high += 1,
                RiskLevel::Medium => summary.medium += 1,
                RiskLevel::Low => summary.low += 1,
            }
        }
        // RiskLevel orders Critical first, so min() is the most severe.
        summary.highest = findings.iter().map(|f| f.risk_level).min();
        summary
    }
}

/// Result of a full compliance check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    pub profile: BusinessProfile,
    /// Applicable findings in rule declaration order.
    pub findings: Vec<ComplianceFinding>,
    pub summary: FindingSummary,
    /// `"Found N applicable compliances."`
    pub message: String,
}

impl CheckReport {
    pub fn new(profile: BusinessProfile, findings: Vec<ComplianceFinding>) -> Self {
        let summary = FindingSummary::from_findings(&findings);
        let message = format!("Found {} applicable compliances.", findings.len());
        Self {
            profile,
            findings,
            summary,
            message,
        }
    }

    /// Whether no obligation applies. A valid outcome, not an error.
    pub fn is_clear(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Per-rule evaluation trace: what was checked and whether it fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub obligation: Obligation,
    /// Trigger condition, e.g. `employees >= 10`.
    pub condition: String,
    /// Finding name produced when triggered.
    pub result: String,
    pub triggered: bool,
}

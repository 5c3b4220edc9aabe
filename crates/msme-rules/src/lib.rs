//! # msme-rules: Compliance Rule Engine
//!
//! Maps a [`BusinessProfile`](msme_core::BusinessProfile) to the ordered list
//! of regulatory obligations whose trigger conditions hold.
//!
//! ## Architecture
//!
//! - **Thresholds** (`thresholds.rs`): the turnover and head-count cut-offs.
//!   Statutory values by default, overridable from YAML as regulation moves.
//!
//! - **Rule** (`rule.rs`): a rule is a [`Trigger`] (when it applies), a
//!   [`RiskPolicy`] (how severe it is) and static statute texts.
//!
//! - **Table** (`table.rs`): the eight rules, declared once. Every adapter
//!   evaluates through this table; there is no second copy.
//!
//! - **Engine** (`engine.rs`): [`RuleEngine::evaluate`], plus rule inspection
//!   and summarised [`CheckReport`]s.
//!
//! ## Determinism
//!
//! Evaluation is a pure function of the profile and the thresholds: no I/O,
//! no clock, no randomness. Findings come back in rule declaration order
//! (GST, Tax Audit, ESIC, EPF, Shops & Establishment, TDS, Professional Tax,
//! Transfer Pricing), never sorted by risk.
//!
//! ```
//! use msme_core::{BusinessProfile, RiskLevel};
//!
//! let findings = msme_rules::evaluate(&BusinessProfile::new(5_000_000, 0));
//! assert_eq!(findings.len(), 1);
//! assert_eq!(findings[0].risk_level, RiskLevel::Critical);
//! assert!(findings[0].reason.contains("50.0L"));
//! ```

pub mod engine;
pub mod error;
pub mod report;
pub mod rule;
pub mod table;
pub mod thresholds;

pub use engine::RuleEngine;
pub use error::RulesError;
pub use report::{CheckReport, FindingSummary, RuleOutcome};
pub use rule::{ComplianceRule, RiskPolicy, Trigger};
pub use thresholds::Thresholds;

use msme_core::{BusinessProfile, ComplianceFinding};

/// Evaluate a profile against the statutory rule table.
pub fn evaluate(profile: &BusinessProfile) -> Vec<ComplianceFinding> {
    RuleEngine::default().evaluate(profile)
}

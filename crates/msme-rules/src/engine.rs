//! # Rule Engine
//!
//! Evaluates a [`BusinessProfile`] against the rule table. Every rule is
//! checked (no short-circuiting) and findings keep declaration order.

use std::path::Path;

use msme_core::{BusinessProfile, ComplianceFinding};

use crate::error::RulesResult;
use crate::report::{CheckReport, RuleOutcome};
use crate::rule::ComplianceRule;
use crate::table::rule_table;
use crate::thresholds::Thresholds;

/// The compliance rule engine.
///
/// Immutable after construction, so a single instance can be shared across
/// threads behind an `Arc`.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    thresholds: Thresholds,
    rules: Vec<ComplianceRule>,
}

impl RuleEngine {
    /// Build an engine for the given cut-offs, rejecting inconsistent ones.
    pub fn new(thresholds: Thresholds) -> RulesResult<Self> {
        thresholds.validate()?;
        Ok(Self::build(thresholds))
    }

    /// Build an engine from a YAML thresholds file.
    pub fn from_path(path: &Path) -> RulesResult<Self> {
        Ok(Self::build(Thresholds::from_path(path)?))
    }

    fn build(thresholds: Thresholds) -> Self {
        let rules = rule_table(&thresholds);
        Self { thresholds, rules }
    }

    /// The cut-offs this engine was built with.
    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// The rule table in declaration order.
    pub fn rules(&self) -> &[ComplianceRule] {
        &self.rules
    }

    /// Findings for every rule whose trigger holds, in declaration order.
    pub fn evaluate(&self, profile: &BusinessProfile) -> Vec<ComplianceFinding> {
        let findings: Vec<ComplianceFinding> = self
            .rules
            .iter()
            .filter(|rule| rule.applies(profile))
            .map(|rule| rule.finding(profile))
            .collect();
        tracing::debug!(
            turnover = profile.turnover.get(),
            employee_count = profile.employee_count,
            findings = findings.len(),
            "evaluated compliance rules"
        );
        findings
    }

    /// One outcome per rule, triggered or not.
    pub fn inspect(&self, profile: &BusinessProfile) -> Vec<RuleOutcome> {
        self.rules
            .iter()
            .map(|rule| RuleOutcome {
                obligation: rule.obligation,
                condition: rule.trigger.describe(),
                result: rule.name().to_string(),
                triggered: rule.applies(profile),
            })
            .collect()
    }

    /// Evaluate and summarise.
    pub fn check(&self, profile: &BusinessProfile) -> CheckReport {
        CheckReport::new(*profile, self.evaluate(profile))
    }
}

impl Default for RuleEngine {
    /// Engine with statutory thresholds.
    fn default() -> Self {
        Self::build(Thresholds::STATUTORY)
    }
}

//! # Compliance Rules
//!
//! A rule pairs a [`Trigger`] deciding whether the obligation applies with a
//! [`RiskPolicy`] deciding how severe non-compliance is. The statute texts
//! are fixed; only the reason line interpolates the profile.

use serde::Serialize;

use msme_core::{BusinessProfile, ComplianceFinding, Obligation, RiskLevel, Rupees};

/// Condition under which a rule (or a risk escalation) applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "threshold", rename_all = "snake_case")]
pub enum Trigger {
    /// `turnover > threshold`. Equality does not trigger.
    TurnoverAbove(u64),
    /// `employee_count >= threshold`. Equality triggers.
    EmployeesAtLeast(u32),
}

impl Trigger {
    /// Whether the condition holds for `profile`.
    pub fn holds(&self, profile: &BusinessProfile) -> bool {
        match *self {
            Self::TurnoverAbove(threshold) => profile.turnover.get() > threshold,
            Self::EmployeesAtLeast(threshold) => profile.employee_count >= threshold,
        }
    }

    /// Human-readable condition, e.g. `turnover > ₹40.0L`.
    pub fn describe(&self) -> String {
        match *self {
            Self::TurnoverAbove(threshold) => format!("turnover > {}", Rupees::new(threshold)),
            Self::EmployeesAtLeast(threshold) => format!("employees >= {threshold}"),
        }
    }
}

/// How the risk level of a triggered rule is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskPolicy {
    /// Always the same level.
    Fixed(RiskLevel),
    /// `escalated` when `when` holds, `base` otherwise.
    Escalating {
        base: RiskLevel,
        escalated: RiskLevel,
        when: Trigger,
    },
}

impl RiskPolicy {
    /// Pick the risk level for `profile`.
    pub fn resolve(&self, profile: &BusinessProfile) -> RiskLevel {
        match *self {
            Self::Fixed(level) => level,
            Self::Escalating {
                base,
                escalated,
                when,
            } => {
                if when.holds(profile) {
                    escalated
                } else {
                    base
                }
            }
        }
    }

    /// e.g. `High (Critical when employees >= 20)`.
    pub fn describe(&self) -> String {
        match *self {
            Self::Fixed(level) => level.to_string(),
            Self::Escalating {
                base,
                escalated,
                when,
            } => format!("{base} ({escalated} when {})", when.describe()),
        }
    }
}

/// One entry of the rule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplianceRule {
    pub obligation: Obligation,
    pub trigger: Trigger,
    pub risk: RiskPolicy,
    pub deadline: &'static str,
    pub penalty: &'static str,
    pub explanation: &'static str,
    pub law: &'static str,
}

impl ComplianceRule {
    /// Finding name, e.g. "GST Registration".
    pub fn name(&self) -> &'static str {
        self.obligation.display_name()
    }

    /// Whether this rule's trigger holds for `profile`.
    pub fn applies(&self, profile: &BusinessProfile) -> bool {
        self.trigger.holds(profile)
    }

    /// The justification line. GST quotes the turnover in lakhs; ESIC and
    /// EPF quote the head count.
    pub fn reason(&self, profile: &BusinessProfile) -> String {
        let employees = profile.employee_count;
        match self.obligation {
            Obligation::GstRegistration => format!(
                "Your turnover of {} exceeds ₹20L threshold",
                profile.turnover
            ),
            Obligation::TaxAudit => "Turnover exceeds ₹1 Crore — audit is mandatory".to_string(),
            Obligation::EsicRegistration => {
                format!("You have {employees} employees — ESIC applies to 10+ employee firms")
            }
            Obligation::EpfRegistration => {
                format!("{employees} employees means Provident Fund is mandatory")
            }
            Obligation::ShopsAndEstablishment => {
                "Applies to all businesses with at least 1 employee".to_string()
            }
            Obligation::TdsCompliance => "Turnover above ₹50L triggers TDS obligations".to_string(),
            Obligation::ProfessionalTax => {
                "Applicable to businesses with employees in most Indian states".to_string()
            }
            Obligation::TransferPricing => {
                "International transactions above threshold need documentation".to_string()
            }
        }
    }

    /// Build the finding for `profile`. Does not check [`Self::applies`].
    pub fn finding(&self, profile: &BusinessProfile) -> ComplianceFinding {
        ComplianceFinding {
            obligation: self.obligation,
            name: self.name().to_string(),
            reason: self.reason(profile),
            deadline: self.deadline.to_string(),
            risk_level: self.risk.resolve(profile),
            penalty: self.penalty.to_string(),
            explanation: self.explanation.to_string(),
            law: self.law.to_string(),
        }
    }
}

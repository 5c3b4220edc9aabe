//! # Rule Table
//!
//! The eight compliance rules, declared once. Order here is the order of
//! findings in every result.

use msme_core::{Obligation, RiskLevel};

use crate::rule::{ComplianceRule, RiskPolicy, Trigger};
use crate::thresholds::Thresholds;

/// Build the rule table for the given cut-offs.
pub fn rule_table(t: &Thresholds) -> Vec<ComplianceRule> {
    vec![
        ComplianceRule {
            obligation: Obligation::GstRegistration,
            trigger: Trigger::TurnoverAbove(t.gst_registration),
            risk: RiskPolicy::Escalating {
                base: RiskLevel::High,
                escalated: RiskLevel::Critical,
                when: Trigger::TurnoverAbove(t.gst_critical),
            },
            deadline: "Within 30 days of crossing threshold",
            penalty: "₹10,000 or 10% of tax due (whichever is higher)",
            explanation: "Every business with annual turnover above ₹20 lakh (₹10 lakh for special states) must register for GST.",
            law: "CGST Act, 2017 - Section 22",
        },
        ComplianceRule {
            obligation: Obligation::TaxAudit,
            trigger: Trigger::TurnoverAbove(t.tax_audit),
            risk: RiskPolicy::Fixed(RiskLevel::Critical),
            deadline: "September 30 of the assessment year",
            penalty: "₹1,50,000 or 0.5% of turnover (whichever is lower)",
            explanation: "Businesses with turnover above ₹1 Crore must get accounts audited by a CA.",
            law: "Income Tax Act - Section 44AB",
        },
        ComplianceRule {
            obligation: Obligation::EsicRegistration,
            trigger: Trigger::EmployeesAtLeast(t.esic),
            risk: RiskPolicy::Escalating {
                base: RiskLevel::High,
                escalated: RiskLevel::Critical,
                when: Trigger::EmployeesAtLeast(t.esic_critical),
            },
            deadline: "Within 15 days of becoming applicable",
            penalty: "Up to ₹5,000 and imprisonment up to 2 years",
            explanation: "If your company has 10 or more employees earning up to ₹21,000/month, you must register under ESIC.",
            law: "ESI Act, 1948 - Section 2A",
        },
        ComplianceRule {
            obligation: Obligation::EpfRegistration,
            trigger: Trigger::EmployeesAtLeast(t.epf),
            risk: RiskPolicy::Fixed(RiskLevel::Critical),
            deadline: "Within 1 month of crossing 20 employees",
            penalty: "Damages up to 100% of arrears + prosecution",
            explanation: "Every establishment with 20+ employees must register with EPFO.",
            law: "EPF & MP Act, 1952 - Section 1(3)",
        },
        ComplianceRule {
            obligation: Obligation::ShopsAndEstablishment,
            trigger: Trigger::EmployeesAtLeast(t.shops_establishment),
            risk: RiskPolicy::Fixed(RiskLevel::Medium),
            deadline: "Within 30 days of starting business",
            penalty: "₹1,000 to ₹25,000 depending on state",
            explanation: "This state-level registration regulates working hours, holidays, leave, and employment conditions.",
            law: "Shops & Establishment Act (State-specific)",
        },
        ComplianceRule {
            obligation: Obligation::TdsCompliance,
            trigger: Trigger::TurnoverAbove(t.tds),
            risk: RiskPolicy::Fixed(RiskLevel::High),
            deadline: "7th of every month / quarterly return by end of quarter",
            penalty: "₹200/day for late filing + interest at 1.5% per month",
            explanation: "You must deduct tax at source when making certain payments.",
            law: "Income Tax Act - Section 194 series",
        },
        ComplianceRule {
            obligation: Obligation::ProfessionalTax,
            trigger: Trigger::EmployeesAtLeast(t.professional_tax),
            risk: RiskPolicy::Fixed(RiskLevel::Low),
            deadline: "Monthly or annually (varies by state)",
            penalty: "₹1,000 to ₹5,000 per month of default",
            explanation: "Professional Tax is a state-level tax on professions, trades, and employment.",
            law: "State Professional Tax Act",
        },
        ComplianceRule {
            obligation: Obligation::TransferPricing,
            trigger: Trigger::TurnoverAbove(t.transfer_pricing),
            risk: RiskPolicy::Fixed(RiskLevel::High),
            deadline: "November 30 of the assessment year",
            penalty: "2% of transaction value for non-maintenance of records",
            explanation: "If your company engages in international transactions with associated enterprises, you need TP documentation.",
            law: "Income Tax Act - Section 92D",
        },
    ]
}

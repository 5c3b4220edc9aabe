//! # Obligation: Single Source of Truth
//!
//! The eight regulatory obligations the rule engine can raise, declared in
//! rule order. Every `match` on `Obligation` must be exhaustive, so adding
//! an obligation forces the rule table, the reason builder and every adapter
//! to handle it at compile time.
//!
//! | # | Obligation | Statute |
//! |---|------------|---------|
//! | 1 | GstRegistration | CGST Act 2017 §22 |
//! | 2 | TaxAudit | Income Tax Act §44AB |
//! | 3 | EsicRegistration | ESI Act 1948 §2A |
//! | 4 | EpfRegistration | EPF & MP Act 1952 §1(3) |
//! | 5 | ShopsAndEstablishment | State Shops & Establishment Acts |
//! | 6 | TdsCompliance | Income Tax Act §194 series |
//! | 7 | ProfessionalTax | State Professional Tax Acts |
//! | 8 | TransferPricing | Income Tax Act §92D |

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

/// A regulatory obligation an MSME may be subject to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Obligation {
    /// Goods and Services Tax registration.
    GstRegistration,
    /// Statutory tax audit by a chartered accountant.
    TaxAudit,
    /// Employees' State Insurance registration.
    EsicRegistration,
    /// Employees' Provident Fund registration.
    EpfRegistration,
    /// State shops and establishments registration.
    ShopsAndEstablishment,
    /// Tax deducted at source deposits and returns.
    TdsCompliance,
    /// State professional tax on employment.
    ProfessionalTax,
    /// Transfer pricing documentation for international transactions.
    TransferPricing,
}

/// Total number of obligations.
pub const OBLIGATION_COUNT: usize = 8;

impl Obligation {
    /// All obligations in rule declaration order.
    pub fn all() -> &'static [Obligation] {
        &[
            Self::GstRegistration,
            Self::TaxAudit,
            Self::EsicRegistration,
            Self::EpfRegistration,
            Self::ShopsAndEstablishment,
            Self::TdsCompliance,
            Self::ProfessionalTax,
            Self::TransferPricing,
        ]
    }

    /// Stable snake_case identifier, matching the serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GstRegistration => "gst_registration",
            Self::TaxAudit => "tax_audit",
            Self::EsicRegistration => "esic_registration",
            Self::EpfRegistration => "epf_registration",
            Self::ShopsAndEstablishment => "shops_and_establishment",
            Self::TdsCompliance => "tds_compliance",
            Self::ProfessionalTax => "professional_tax",
            Self::TransferPricing => "transfer_pricing",
        }
    }

    /// The finding name shown to users.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::GstRegistration => "GST Registration",
            Self::TaxAudit => "Tax Audit (Section 44AB)",
            Self::EsicRegistration => "ESIC Registration",
            Self::EpfRegistration => "EPF Registration",
            Self::ShopsAndEstablishment => "Shops & Establishment Act",
            Self::TdsCompliance => "TDS Compliance",
            Self::ProfessionalTax => "Professional Tax",
            Self::TransferPricing => "Transfer Pricing Documentation",
        }
    }
}

impl std::fmt::Display for Obligation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Obligation {
    type Err = ValidationError;

    /// Parse an obligation from its snake_case identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Obligation::all()
            .iter()
            .copied()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownObligation(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_has_expected_count() {
        assert_eq!(Obligation::all().len(), OBLIGATION_COUNT);
    }

    #[test]
    fn identifiers_and_names_are_unique() {
        let ids: HashSet<_> = Obligation::all().iter().map(|o| o.as_str()).collect();
        let names: HashSet<_> = Obligation::all().iter().map(|o| o.display_name()).collect();
        assert_eq!(ids.len(), OBLIGATION_COUNT);
        assert_eq!(names.len(), OBLIGATION_COUNT);
    }

    #[test]
    fn as_str_matches_serde() {
        for o in Obligation::all() {
            let json = serde_json::to_string(o).unwrap();
            assert_eq!(json, format!("\"{}\"", o.as_str()));
        }
    }

    #[test]
    fn from_str_roundtrips_every_identifier() {
        for o in Obligation::all() {
            assert_eq!(o.as_str().parse::<Obligation>().unwrap(), *o);
        }
        assert!("gst".parse::<Obligation>().is_err());
    }
}

//! # Thresholds
//!
//! Statutory cut-offs that decide when each rule applies. These are policy
//! data: GST and audit limits are revised by notification, so the engine
//! takes them as input rather than baking them into the rule logic.
//!
//! Every field is optional in YAML; omitted fields keep the statutory value.
//!
//! ```yaml
//! # Raise the GST critical tier to ₹50L, keep everything else.
//! gst_critical: 5000000
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RulesError, RulesResult};

/// Turnover (rupees) and head-count cut-offs for the rule table.
///
/// Turnover cut-offs are exclusive (`turnover > cut-off`); head-count
/// cut-offs are inclusive (`employees >= cut-off`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Thresholds {
    /// GST registration applies above this turnover.
    pub gst_registration: u64,
    /// GST registration escalates to Critical above this turnover.
    pub gst_critical: u64,
    /// Tax audit under §44AB applies above this turnover.
    pub tax_audit: u64,
    /// TDS obligations apply above this turnover.
    pub tds: u64,
    /// Transfer pricing documentation applies above this turnover.
    pub transfer_pricing: u64,
    /// ESIC registration applies from this head count.
    pub esic: u32,
    /// ESIC escalates to Critical from this head count.
    pub esic_critical: u32,
    /// EPF registration applies from this head count.
    pub epf: u32,
    /// Shops & Establishment registration applies from this head count.
    pub shops_establishment: u32,
    /// Professional tax applies from this head count.
    pub professional_tax: u32,
}

impl Thresholds {
    /// The statutory values.
    pub const STATUTORY: Thresholds = Thresholds {
        gst_registration: 0,
        gst_critical: 4_000_000,
        tax_audit: 10_000_000,
        tds: 5_000_000,
        transfer_pricing: 50_000_000,
        esic: 10,
        esic_critical: 20,
        epf: 20,
        shops_establishment: 1,
        professional_tax: 5,
    };

    /// Parse thresholds from a YAML document.
    pub fn from_yaml_str(yaml: &str) -> RulesResult<Self> {
        let thresholds: Thresholds =
            serde_yaml::from_str(yaml).map_err(|source| RulesError::YamlParse {
                path: "<inline>".into(),
                source,
            })?;
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Load thresholds from a YAML file.
    pub fn from_path(path: &Path) -> RulesResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| RulesError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let thresholds: Thresholds =
            serde_yaml::from_str(&raw).map_err(|source| RulesError::YamlParse {
                path: path.to_path_buf(),
                source,
            })?;
        thresholds.validate()?;
        tracing::debug!(path = %path.display(), "loaded threshold overrides");
        Ok(thresholds)
    }

    /// Reject escalation tiers that sit below the rule they escalate.
    pub fn validate(&self) -> RulesResult<()> {
        if self.gst_critical < self.gst_registration {
            return Err(RulesError::InvalidThreshold(format!(
                "gst_critical ({}) must not be below gst_registration ({})",
                self.gst_critical, self.gst_registration
            )));
        }
        if self.esic_critical < self.esic {
            return Err(RulesError::InvalidThreshold(format!(
                "esic_critical ({}) must not be below esic ({})",
                self.esic_critical, self.esic
            )));
        }
        Ok(())
    }

    /// Render as YAML.
    pub fn to_yaml(&self) -> RulesResult<String> {
        serde_yaml::to_string(self).map_err(RulesError::YamlSerialize)
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::STATUTORY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_is_statutory() {
        let t = Thresholds::default();
        assert_eq!(t.gst_critical, 4_000_000);
        assert_eq!(t.tax_audit, 10_000_000);
        assert_eq!(t.tds, 5_000_000);
        assert_eq!(t.transfer_pricing, 50_000_000);
        assert_eq!(t.esic, 10);
        assert_eq!(t.esic_critical, 20);
        assert_eq!(t.epf, 20);
        assert_eq!(t.shops_establishment, 1);
        assert_eq!(t.professional_tax, 5);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn partial_yaml_keeps_statutory_defaults() {
        let t = Thresholds::from_yaml_str("gst_critical: 5000000\n").unwrap();
        assert_eq!(t.gst_critical, 5_000_000);
        assert_eq!(t.tax_audit, Thresholds::STATUTORY.tax_audit);
        assert_eq!(t.esic, Thresholds::STATUTORY.esic);
    }

    #[test]
    fn empty_yaml_document_is_statutory() {
        let t = Thresholds::from_yaml_str("{}").unwrap();
        assert_eq!(t, Thresholds::STATUTORY);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = Thresholds::from_yaml_str("gst_limit: 10\n").unwrap_err();
        assert!(matches!(err, RulesError::YamlParse { .. }));
        assert!(err.to_string().contains("<inline>"));
    }

    #[test]
    fn negative_value_is_rejected() {
        assert!(Thresholds::from_yaml_str("esic: -1\n").is_err());
    }

    #[test]
    fn inverted_escalation_tier_is_rejected() {
        let err = Thresholds::from_yaml_str("esic: 30\n").unwrap_err();
        assert!(matches!(err, RulesError::InvalidThreshold(_)));
        assert!(err.to_string().contains("esic_critical"));

        let err = Thresholds::from_yaml_str("gst_registration: 5000000\n").unwrap_err();
        assert!(err.to_string().contains("gst_critical"));
    }

    #[test]
    fn from_path_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tds: 7500000").unwrap();
        let t = Thresholds::from_path(file.path()).unwrap();
        assert_eq!(t.tds, 7_500_000);
    }

    #[test]
    fn from_path_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Thresholds::from_path(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, RulesError::Io { .. }));
    }

    #[test]
    fn serialize_failure_is_not_reported_as_parse() {
        let source = serde_yaml::from_str::<u32>("[").unwrap_err();
        let err = RulesError::YamlSerialize(source);
        assert!(err.to_string().starts_with("failed to serialize thresholds"));
        assert!(!err.to_string().contains("parse thresholds"));
    }

    #[test]
    fn yaml_output_parses_back() {
        let yaml = Thresholds::STATUTORY.to_yaml().unwrap();
        assert_eq!(Thresholds::from_yaml_str(&yaml).unwrap(), Thresholds::STATUTORY);
    }
}

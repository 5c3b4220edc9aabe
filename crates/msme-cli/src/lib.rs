//! # msme-cli: Command-Line Adapter
//!
//! Provides the `msme` command-line interface over the compliance rule
//! engine.
//!
//! ## Subcommands
//!
//! - `msme check`: Evaluate a business profile.
//! - `msme rules`: Print the rule table, optionally marking triggered rules.
//! - `msme thresholds`: Show effective thresholds or validate an override file.
//!
//! ```bash
//! msme check --turnover 5000000 --employees 12
//! msme --thresholds overrides.yaml rules --turnover 0 --employees 1
//! msme thresholds validate overrides.yaml
//! ```
//!
//! Handlers return an exit code: 0 on success, 1 on a failed validation of
//! a file, 2 on invalid input.

pub mod check;
pub mod rules;
pub mod thresholds;

use std::path::Path;

use anyhow::{Context, Result};
use msme_core::{BusinessProfile, ValidationError};
use msme_rules::RuleEngine;

/// Exit code for invalid command-line input.
pub const EXIT_INVALID_INPUT: u8 = 2;

/// Build the rule engine, applying threshold overrides when given.
pub fn load_engine(thresholds: Option<&Path>) -> Result<RuleEngine> {
    match thresholds {
        Some(path) => RuleEngine::from_path(path)
            .with_context(|| format!("failed to load thresholds from {}", path.display())),
        None => Ok(RuleEngine::default()),
    }
}

/// Validate optional signed inputs into a profile.
pub fn parse_profile(
    turnover: Option<i64>,
    employees: Option<i64>,
) -> Result<BusinessProfile, ValidationError> {
    BusinessProfile::from_optional(turnover.map(i128::from), employees.map(i128::from))
}

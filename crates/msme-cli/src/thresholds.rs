//! # Thresholds Subcommand
//!
//! `show` prints the effective cut-offs as YAML; `validate` checks an
//! override file without running anything.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use msme_rules::Thresholds;

/// Arguments for the `msme thresholds` subcommand.
#[derive(Args, Debug)]
pub struct ThresholdsArgs {
    #[command(subcommand)]
    pub command: ThresholdsCommand,
}

#[derive(Subcommand, Debug)]
pub enum ThresholdsCommand {
    /// Print the effective thresholds as YAML.
    Show,
    /// Check a threshold override file.
    Validate {
        /// YAML file to check.
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

/// Execute the thresholds subcommand.
///
/// `overrides` is the global `--thresholds` file, if any.
pub fn run_thresholds(args: &ThresholdsArgs, overrides: Option<&Path>) -> Result<u8> {
    match &args.command {
        ThresholdsCommand::Show => {
            let engine = crate::load_engine(overrides)?;
            let yaml = engine
                .thresholds()
                .to_yaml()
                .context("failed to render thresholds")?;
            print!("{yaml}");
            Ok(0)
        }
        ThresholdsCommand::Validate { file } => Ok(validate_file(file)),
    }
}

/// 0 when `file` holds valid thresholds, 1 otherwise.
pub fn validate_file(file: &Path) -> u8 {
    match Thresholds::from_path(file) {
        Ok(_) => {
            println!("OK: {}", file.display());
            0
        }
        Err(e) => {
            println!("FAIL: {}: {e}", file.display());
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_file_passes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.yaml");
        std::fs::write(&path, "esic: 12\nesic_critical: 24\n").unwrap();
        assert_eq!(validate_file(&path), 0);
    }

    #[test]
    fn inconsistent_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.yaml");
        std::fs::write(&path, "esic: 40\n").unwrap();
        assert_eq!(validate_file(&path), 1);
    }

    #[test]
    fn missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(validate_file(&dir.path().join("absent.yaml")), 1);
    }
}

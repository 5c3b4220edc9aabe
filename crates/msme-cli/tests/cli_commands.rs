//! # CLI Command Tests
//!
//! Drives the subcommand handlers through the library API with threshold
//! override files on disk.

use msme_cli::check::{render_text, run_check, CheckArgs, OutputFormat};
use msme_cli::rules::{render_table, RulesArgs, run_rules};
use msme_cli::thresholds::{run_thresholds, ThresholdsArgs, ThresholdsCommand};
use msme_cli::{load_engine, parse_profile};
use msme_core::{BusinessProfile, ValidationError};

fn write_overrides(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("thresholds.yaml");
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn load_engine_without_overrides_is_statutory() {
    let engine = load_engine(None).unwrap();
    assert_eq!(engine.thresholds().tax_audit, 10_000_000);
}

#[test]
fn load_engine_applies_overrides() {
    let (_dir, path) = write_overrides("professional_tax: 2\n");
    let engine = load_engine(Some(&path)).unwrap();
    let report = engine.check(&BusinessProfile::new(0, 2));
    let text = render_text(&report);
    assert!(text.contains("Professional Tax"));
    assert!(text.contains("Shops & Establishment Act"));
}

#[test]
fn load_engine_error_names_the_file() {
    let (_dir, path) = write_overrides("tax_audit: [1, 2]\n");
    let err = load_engine(Some(&path)).unwrap_err();
    let rendered = format!("{err:#}");
    assert!(rendered.contains("thresholds.yaml"), "{rendered}");
}

#[test]
fn parse_profile_mirrors_domain_validation() {
    assert_eq!(parse_profile(Some(10), None), Ok(BusinessProfile::new(10, 0)));
    assert_eq!(parse_profile(None, None), Err(ValidationError::EmptyProfile));
    assert_eq!(
        parse_profile(None, Some(-2)),
        Err(ValidationError::NegativeEmployeeCount(-2))
    );
}

#[test]
fn check_and_rules_succeed_with_overrides() {
    let (_dir, path) = write_overrides("gst_critical: 8000000\n");
    let engine = load_engine(Some(&path)).unwrap();

    let check = CheckArgs {
        turnover: Some(5_000_000),
        employees: Some(0),
        format: OutputFormat::Text,
    };
    assert_eq!(run_check(&check, &engine).unwrap(), 0);

    let rules = RulesArgs {
        turnover: Some(5_000_000),
        employees: None,
    };
    assert_eq!(run_rules(&rules, &engine).unwrap(), 0);
    let table = render_table(&engine, Some(&BusinessProfile::new(5_000_000, 0)));
    assert!(table.contains("High (Critical when turnover > ₹80.0L)"));
}

#[test]
fn thresholds_show_and_validate() {
    let (_dir, path) = write_overrides("tds: 6000000\n");
    let show = ThresholdsArgs {
        command: ThresholdsCommand::Show,
    };
    assert_eq!(run_thresholds(&show, Some(&path)).unwrap(), 0);

    let validate = ThresholdsArgs {
        command: ThresholdsCommand::Validate { file: path.clone() },
    };
    assert_eq!(run_thresholds(&validate, None).unwrap(), 0);
}

#[test]
fn thresholds_show_with_broken_overrides_is_an_error() {
    let (_dir, path) = write_overrides("esic_critical: 5\n");
    let show = ThresholdsArgs {
        command: ThresholdsCommand::Show,
    };
    assert!(run_thresholds(&show, Some(&path)).is_err());

    let validate = ThresholdsArgs {
        command: ThresholdsCommand::Validate { file: path },
    };
    assert_eq!(run_thresholds(&validate, None).unwrap(), 1);
}

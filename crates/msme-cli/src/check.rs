//! # Check Subcommand
//!
//! Evaluates one business profile and prints the findings in rule order.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use msme_rules::{CheckReport, RuleEngine};

use crate::EXIT_INVALID_INPUT;

/// Output format for `msme check`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing.
    #[default]
    Text,
    /// The full check report as JSON.
    Json,
}

/// Arguments for the `msme check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Annual turnover in whole rupees.
    #[arg(long, allow_negative_numbers = true)]
    pub turnover: Option<i64>,

    /// Number of employees.
    #[arg(long, allow_negative_numbers = true)]
    pub employees: Option<i64>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute the check subcommand.
pub fn run_check(args: &CheckArgs, engine: &RuleEngine) -> Result<u8> {
    let profile = match crate::parse_profile(args.turnover, args.employees) {
        Ok(profile) => profile,
        Err(e) => {
            eprintln!("error: {e}");
            return Ok(EXIT_INVALID_INPUT);
        }
    };

    let report = engine.check(&profile);
    tracing::info!(findings = report.summary.total, "compliance check complete");

    let output = match args.format {
        OutputFormat::Text => render_text(&report),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&report).context("failed to serialize report")?
        }
    };
    println!("{output}");
    Ok(0)
}

/// Render a report for the terminal.
pub fn render_text(report: &CheckReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Profile: turnover {} ({} rupees), {} employees",
        report.profile.turnover,
        report.profile.turnover.get(),
        report.profile.employee_count
    );
    let _ = writeln!(out);

    if report.is_clear() {
        let _ = writeln!(out, "No compliance obligations apply to this profile.");
    }

    for finding in &report.findings {
        let _ = writeln!(out, "[{}] {}", finding.risk_level, finding.name);
        let _ = writeln!(out, "    {}", finding.reason);
        let _ = writeln!(out, "    Deadline: {}", finding.deadline);
        let _ = writeln!(out, "    Penalty:  {}", finding.penalty);
        let _ = writeln!(out, "    Law:      {}", finding.law);
        let _ = writeln!(out);
    }

    let s = &report.summary;
    let _ = write!(
        out,
        "{} (Critical {}, High {}, Medium {}, Low {})",
        report.message, s.critical, s.high, s.medium, s.low
    );
    out
}

//! # Rules Subcommand
//!
//! Prints the rule table. With a profile, each row is marked `[x]` when the
//! rule fires and `[ ]` when it does not.

use std::fmt::Write as _;

use anyhow::Result;
use clap::Args;
use msme_core::BusinessProfile;
use msme_rules::RuleEngine;

use crate::EXIT_INVALID_INPUT;

/// Arguments for the `msme rules` subcommand.
#[derive(Args, Debug)]
pub struct RulesArgs {
    /// Annual turnover in whole rupees.
    #[arg(long, allow_negative_numbers = true)]
    pub turnover: Option<i64>,

    /// Number of employees.
    #[arg(long, allow_negative_numbers = true)]
    pub employees: Option<i64>,
}

/// Execute the rules subcommand.
pub fn run_rules(args: &RulesArgs, engine: &RuleEngine) -> Result<u8> {
    let profile = if args.turnover.is_none() && args.employees.is_none() {
        None
    } else {
        match crate::parse_profile(args.turnover, args.employees) {
            Ok(profile) => Some(profile),
            Err(e) => {
                eprintln!("error: {e}");
                return Ok(EXIT_INVALID_INPUT);
            }
        }
    };
    println!("{}", render_table(engine, profile.as_ref()));
    Ok(0)
}

/// Render the rule table, one rule per line.
pub fn render_table(engine: &RuleEngine, profile: Option<&BusinessProfile>) -> String {
    let mut out = String::new();
    for (index, rule) in engine.rules().iter().enumerate() {
        if let Some(profile) = profile {
            let marker = if rule.applies(profile) { "[x]" } else { "[ ]" };
            let _ = write!(out, "{marker} ");
        }
        let _ = writeln!(
            out,
            "{}. {:<32} {:<22} {:<40} {}",
            index + 1,
            rule.name(),
            rule.trigger.describe(),
            rule.risk.describe(),
            rule.law
        );
    }
    out.trim_end().to_string()
}

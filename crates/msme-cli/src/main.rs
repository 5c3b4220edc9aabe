//! # msme CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use msme_cli::check::{run_check, CheckArgs};
use msme_cli::load_engine;
use msme_cli::rules::{run_rules, RulesArgs};
use msme_cli::thresholds::{run_thresholds, ThresholdsArgs};

/// MSME compliance checker
///
/// Maps annual turnover and head count to the Indian regulatory obligations
/// that apply: GST, tax audit, TDS, transfer pricing, ESIC, EPF, shops and
/// establishments registration, and professional tax.
#[derive(Parser, Debug)]
#[command(name = "msme", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// YAML file with threshold overrides.
    #[arg(long, global = true, value_name = "FILE")]
    thresholds: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a business profile.
    Check(CheckArgs),

    /// Print the rule table.
    Rules(RulesArgs),

    /// Show or validate threshold overrides.
    Thresholds(ThresholdsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let overrides = cli.thresholds.as_deref();
    let result = match &cli.command {
        Commands::Check(args) => load_engine(overrides).and_then(|engine| run_check(args, &engine)),
        Commands::Rules(args) => load_engine(overrides).and_then(|engine| run_rules(args, &engine)),
        Commands::Thresholds(args) => run_thresholds(args, overrides),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

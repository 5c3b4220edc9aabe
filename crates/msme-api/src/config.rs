//! # Service Configuration
//!
//! Read from environment variables at startup. Invalid values are a startup
//! error, never silently replaced by defaults.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `PORT` | 8080 | HTTP listen port |
//! | `MSME_SIMULATED_LATENCY_MS` | 0 | Delay before each check response |
//! | `MSME_THRESHOLDS` | unset | YAML threshold overrides |
//! | `MSME_STORE_DIR` | unset | File store root; unset means in-memory |
//! | `MSME_HISTORY_LIMIT` | 50 | Check records kept in history |

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Startup configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An environment variable held an unparseable value.
    #[error("invalid value {value:?} for {var}")]
    InvalidValue { var: &'static str, value: String },

    /// Threshold overrides could not be loaded.
    #[error(transparent)]
    Rules(#[from] msme_rules::RulesError),

    /// The configured store could not be opened.
    #[error(transparent)]
    Store(#[from] msme_store::StoreError),
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// Artificial delay applied to each check, in milliseconds.
    pub simulated_latency_ms: u64,
    /// YAML file with threshold overrides.
    pub thresholds_path: Option<PathBuf>,
    /// Directory for the file store. `None` keeps records in memory.
    pub store_dir: Option<PathBuf>,
    /// Maximum number of records kept in check history.
    pub history_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            simulated_latency_ms: 0,
            thresholds_path: None,
            store_dir: None,
            history_limit: 50,
        }
    }
}

impl AppConfig {
    /// Build from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let non_empty = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        Ok(Self {
            port: parse_var(&lookup, "PORT")?.unwrap_or(defaults.port),
            simulated_latency_ms: parse_var(&lookup, "MSME_SIMULATED_LATENCY_MS")?
                .unwrap_or(defaults.simulated_latency_ms),
            thresholds_path: non_empty("MSME_THRESHOLDS").map(PathBuf::from),
            store_dir: non_empty("MSME_STORE_DIR").map(PathBuf::from),
            history_limit: parse_var(&lookup, "MSME_HISTORY_LIMIT")?
                .unwrap_or(defaults.history_limit),
        })
    }

    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(var) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { var, value: raw }),
    }
}

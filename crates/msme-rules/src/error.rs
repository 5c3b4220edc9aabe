//! Rule-engine error types.
//!
//! Evaluation itself cannot fail; these errors cover loading and validating
//! threshold overrides.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a [`RuleEngine`](crate::RuleEngine).
#[derive(Debug, Error)]
pub enum RulesError {
    /// Threshold file could not be read.
    #[error("failed to read thresholds at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// YAML parsing failed.
    ///
    /// `path` is `<inline>` when parsing from a string.
    #[error("failed to parse thresholds YAML at {path}: {source}")]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// Thresholds could not be rendered as YAML.
    #[error("failed to serialize thresholds as YAML: {0}")]
    YamlSerialize(#[source] serde_yaml::Error),

    /// Thresholds are internally inconsistent.
    #[error("invalid threshold: {0}")]
    InvalidThreshold(String),
}

/// Convenience alias for rule-engine results.
pub type RulesResult<T> = Result<T, RulesError>;

//! # Error Types
//!
//! Validation errors shared across the MSME compliance stack, derived with
//! `thiserror`.
//!
//! ## Design
//!
//! - The rule engine itself is total over valid input and has no error type.
//! - Input problems are caught by [`ValidationError`] before the engine is
//!   invoked, and every variant names the offending value.

use thiserror::Error;

/// Errors raised while validating a business profile or parsing domain
/// identifiers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Turnover must be zero or positive.
    #[error("turnover must not be negative (got {0})")]
    NegativeTurnover(i128),

    /// Turnover does not fit the supported range.
    #[error("turnover {0} exceeds the supported maximum of {max}", max = u64::MAX)]
    TurnoverOutOfRange(i128),

    /// Employee count must be zero or positive.
    #[error("employee_count must not be negative (got {0})")]
    NegativeEmployeeCount(i128),

    /// Employee count does not fit the supported range.
    #[error("employee_count {0} exceeds the supported maximum of {max}", max = u32::MAX)]
    EmployeeCountOutOfRange(i128),

    /// An amount carried a fractional part or was not a finite number.
    #[error("{0} must be a whole, finite number")]
    NonIntegralAmount(String),

    /// Neither turnover nor employee count was supplied.
    #[error("at least one of turnover or employee_count is required")]
    EmptyProfile,

    /// Risk level string is not one of Critical, High, Medium, Low.
    #[error("unknown risk level: {0:?} (expected Critical, High, Medium or Low)")]
    UnknownRiskLevel(String),

    /// Obligation identifier is not recognized.
    #[error("unknown obligation: {0:?}")]
    UnknownObligation(String),
}

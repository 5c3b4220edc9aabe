//! # Business Profile
//!
//! The input to a compliance check: annual turnover and head count.
//! Profiles are constructed per request and never persisted by the engine.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::Rupees;

/// A business descriptor evaluated by the rule engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BusinessProfile {
    /// Annual turnover in whole rupees.
    pub turnover: Rupees,
    /// Number of employees on the payroll.
    pub employee_count: u32,
}

impl BusinessProfile {
    /// Build a profile from already-validated values.
    pub fn new(turnover: u64, employee_count: u32) -> Self {
        Self {
            turnover: Rupees::new(turnover),
            employee_count,
        }
    }

    /// Build a profile from signed inputs, rejecting negatives and values
    /// the profile cannot hold.
    ///
    /// Inputs are `i128` so that every `i64` and every `u64` is accepted as
    /// an argument.
    pub fn try_new(turnover: i128, employee_count: i128) -> Result<Self, ValidationError> {
        if turnover < 0 {
            return Err(ValidationError::NegativeTurnover(turnover));
        }
        let turnover =
            u64::try_from(turnover).map_err(|_| ValidationError::TurnoverOutOfRange(turnover))?;
        if employee_count < 0 {
            return Err(ValidationError::NegativeEmployeeCount(employee_count));
        }
        let employee_count = u32::try_from(employee_count)
            .map_err(|_| ValidationError::EmployeeCountOutOfRange(employee_count))?;
        Ok(Self::new(turnover, employee_count))
    }

    /// Build a profile where either field may be absent.
    ///
    /// A missing field counts as zero, but a request with neither field is
    /// rejected with [`ValidationError::EmptyProfile`].
    pub fn from_optional(
        turnover: Option<i128>,
        employee_count: Option<i128>,
    ) -> Result<Self, ValidationError> {
        if turnover.is_none() && employee_count.is_none() {
            return Err(ValidationError::EmptyProfile);
        }
        Self::try_new(turnover.unwrap_or(0), employee_count.unwrap_or(0))
    }

    /// Whether both fields are zero. Such a profile triggers no rule.
    pub fn is_empty(&self) -> bool {
        self.turnover.is_zero() && self.employee_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_accepts_zero() {
        let p = BusinessProfile::try_new(0, 0).unwrap();
        assert!(p.is_empty());
    }

    #[test]
    fn try_new_rejects_negative_turnover() {
        assert_eq!(
            BusinessProfile::try_new(-1, 3),
            Err(ValidationError::NegativeTurnover(-1))
        );
    }

    #[test]
    fn try_new_rejects_negative_employees() {
        assert_eq!(
            BusinessProfile::try_new(100, -7),
            Err(ValidationError::NegativeEmployeeCount(-7))
        );
    }

    #[test]
    fn try_new_rejects_employee_overflow() {
        let too_many = i128::from(u32::MAX) + 1;
        assert_eq!(
            BusinessProfile::try_new(0, too_many),
            Err(ValidationError::EmployeeCountOutOfRange(too_many))
        );
    }

    #[test]
    fn try_new_accepts_full_u64_turnover() {
        let p = BusinessProfile::try_new(i128::from(u64::MAX), 0).unwrap();
        assert_eq!(p.turnover.get(), u64::MAX);
        let beyond = i128::from(u64::MAX) + 1;
        assert_eq!(
            BusinessProfile::try_new(beyond, 0),
            Err(ValidationError::TurnoverOutOfRange(beyond))
        );
    }

    #[test]
    fn from_optional_defaults_missing_field_to_zero() {
        let p = BusinessProfile::from_optional(Some(5_000_000), None).unwrap();
        assert_eq!(p, BusinessProfile::new(5_000_000, 0));
        let p = BusinessProfile::from_optional(None, Some(12)).unwrap();
        assert_eq!(p, BusinessProfile::new(0, 12));
    }

    #[test]
    fn from_optional_rejects_empty_request() {
        assert_eq!(
            BusinessProfile::from_optional(None, None),
            Err(ValidationError::EmptyProfile)
        );
    }

    #[test]
    fn from_optional_still_validates_present_values() {
        assert_eq!(
            BusinessProfile::from_optional(Some(-10), None),
            Err(ValidationError::NegativeTurnover(-10))
        );
    }

    #[test]
    fn serde_shape() {
        let p = BusinessProfile::new(60_000_000, 25);
        let json = serde_json::to_value(p).unwrap();
        assert_eq!(json, serde_json::json!({"turnover": 60000000, "employee_count": 25}));
    }
}

//! # Rupee Amounts
//!
//! Turnover is carried as whole rupees. Indian compliance thresholds are
//! quoted in lakhs (1,00,000) and crores (1,00,00,000), so findings render
//! amounts in lakhs with one fractional digit, e.g. `₹50.0L`.
//!
//! Rendering divides in `f64` and rounds the exact value of the resulting
//! double half-up to one digit. Near a tie the double decides: 40.05 lakh is
//! stored as 40.04999… and renders as `40.0L`, while 0.25 lakh is exact and
//! renders as `0.3L`.

use serde::{Deserialize, Serialize};

/// One lakh rupees.
pub const LAKH: u64 = 100_000;

/// One crore rupees (100 lakh).
pub const CRORE: u64 = 10_000_000;

/// A non-negative amount in whole rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rupees(u64);

impl Rupees {
    /// Zero rupees.
    pub const ZERO: Rupees = Rupees(0);

    /// Wrap a whole-rupee amount.
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// The raw amount in rupees.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Whether the amount is zero.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Render in lakhs with one fractional digit and an `L` suffix.
    ///
    /// ```
    /// use msme_core::Rupees;
    /// assert_eq!(Rupees::new(5_000_000).lakhs_display(), "50.0L");
    /// assert_eq!(Rupees::new(4_000_001).lakhs_display(), "40.0L");
    /// assert_eq!(Rupees::new(125_000).lakhs_display(), "1.3L");
    /// ```
    pub fn lakhs_display(self) -> String {
        let tenths = round_tenths_half_up(self.0 as f64 / LAKH as f64);
        format!("{}.{}L", tenths / 10, tenths % 10)
    }
}

/// `round(10 * x)` for a finite, non-negative `x`, taken on the exact binary
/// value of `x` with ties going up.
fn round_tenths_half_up(x: f64) -> u128 {
    let bits = x.to_bits();
    let exp_bits = ((bits >> 52) & 0x7ff) as i32;
    let fraction = u128::from(bits & ((1u64 << 52) - 1));
    // x == mantissa * 2^exp exactly.
    let (mantissa, exp) = if exp_bits == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u128 << 52), exp_bits - 1075)
    };
    let scaled = mantissa * 10;
    if exp >= 0 {
        return scaled << exp;
    }
    let shift = -exp;
    if shift >= 127 {
        // Far below half a tenth.
        return 0;
    }
    let whole = scaled >> shift;
    let remainder = scaled & ((1u128 << shift) - 1);
    if remainder >= 1u128 << (shift - 1) {
        whole + 1
    } else {
        whole
    }
}

impl From<u64> for Rupees {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

impl std::fmt::Display for Rupees {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "₹{}", self.lakhs_display())
    }
}

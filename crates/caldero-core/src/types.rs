//! # Domain Types
//!
//! Small value types shared across the crate.
//!
//! ```text
//! ┌─────────────────────────┐
//! │        TipRate          │
//! │  ─────────────────────  │
//! │  percent (Decimal)      │
//! │  10      = 10 %         │
//! │  12.5    = 12.5 %       │
//! │  range   0 ..= 1000     │
//! └─────────────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::{MAX_TIP_PERCENT, MIN_TIP_PERCENT};

// =============================================================================
// Tip Rate
// =============================================================================

/// A tip expressed as a percentage of the subtotal.
///
/// ## Why Decimal?
/// Customers type rates such as `12,5`; holding the percentage as an exact
/// base-10 value keeps it exact until the single rounding step in
/// [`crate::money::Money::percentage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TipRate(Decimal);

impl TipRate {
    /// Creates a tip rate from a percentage.
    #[inline]
    pub fn from_percent(percent: Decimal) -> Self {
        TipRate(percent.normalize())
    }

    /// Creates a tip rate, rejecting percentages outside 0-1000.
    pub fn checked(percent: Decimal) -> CoreResult<Self> {
        let rate = TipRate::from_percent(percent);
        if rate < Self::min() || rate > Self::max() {
            return Err(CoreError::TipRateOutOfRange {
                rate: rate.0.to_string(),
                min: MIN_TIP_PERCENT,
                max: MAX_TIP_PERCENT,
            });
        }
        Ok(rate)
    }

    /// Lowest accepted rate (0 %).
    #[inline]
    pub fn min() -> Self {
        TipRate(Decimal::from(MIN_TIP_PERCENT))
    }

    /// Highest accepted rate (1000 %).
    #[inline]
    pub fn max() -> Self {
        TipRate(Decimal::from(MAX_TIP_PERCENT))
    }

    /// Returns the percentage (12.5 % → `12.5`).
    #[inline]
    pub fn percent(&self) -> Decimal {
        self.0
    }

    /// Zero tip.
    #[inline]
    pub fn zero() -> Self {
        TipRate(Decimal::ZERO)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Default for TipRate {
    fn default() -> Self {
        TipRate::zero()
    }
}

/// Renders as `10%` or `12.5%`.
impl fmt::Display for TipRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_bounds() {
        assert!(TipRate::checked(Decimal::ZERO).is_ok());
        assert!(TipRate::checked(Decimal::from(1000)).is_ok());
        assert!(TipRate::checked(Decimal::new(10_000_001, 4)).is_err());
        assert!(TipRate::checked(Decimal::new(-1, 4)).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(TipRate::from_percent(Decimal::from(10)).to_string(), "10%");
        assert_eq!(TipRate::from_percent(Decimal::new(125, 1)).to_string(), "12.5%");
        // trailing zeros typed by the customer are not echoed back
        assert_eq!(TipRate::from_percent(Decimal::new(15_000, 3)).to_string(), "15%");
    }

    #[test]
    fn test_zero_default() {
        assert!(TipRate::default().is_zero());
        assert_eq!(TipRate::zero().percent(), Decimal::ZERO);
    }
}

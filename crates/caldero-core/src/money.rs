//! # Money Module
//!
//! Provides the `Money` type for handling peso amounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Centavos                                         │
//! │    Tacos $80.00 = 8000 centavos, × 3 = 24000 centavos exactly           │
//! │    Rounding happens once, when a percentage is applied                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use caldero_core::money::Money;
//!
//! let price = Money::from_pesos(80);      // $80.00
//! let line = price.multiply_quantity(3);  // $240.00
//! assert_eq!(line.cents(), 24_000);
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::TipRate;

// =============================================================================
// Money Type
// =============================================================================

/// A peso amount in centavos.
///
/// ## Design Decisions
/// - **i64 (signed)**: arithmetic stays closed under subtraction
/// - **Single field tuple struct**: zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from centavos.
    ///
    /// ## Example
    /// ```rust
    /// use caldero_core::money::Money;
    ///
    /// let price = Money::from_cents(3333); // $33.33
    /// assert_eq!(price.cents(), 3333);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole pesos.
    #[inline]
    pub const fn from_pesos(pesos: i64) -> Self {
        Money(pesos * 100)
    }

    /// Returns the value in centavos.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-peso portion (truncated toward zero).
    #[inline]
    pub const fn pesos(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the centavo portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use caldero_core::money::Money;
    ///
    /// let unit_price = Money::from_pesos(80);
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 24_000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Applies a tip percentage, rounding half away from zero to the centavo.
    ///
    /// Returns `None` when the tip does not fit in centavos.
    ///
    /// ## Rounding Rule
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  ROUND HALF AWAY FROM ZERO                                          │
    /// │                                                                     │
    /// │  raw tip = pesos × rate / 100, exact in Decimal                     │
    /// │                                                                     │
    /// │    4.9995 → 5.00                                                    │
    /// │    4.9950 → 5.00    (exact half rounds up in magnitude)             │
    /// │    4.9949 → 4.99                                                    │
    /// │                                                                     │
    /// │  Banker's rounding would turn 4.985 into 4.98; we return 4.99.      │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// ## Example
    /// ```rust
    /// use caldero_core::money::Money;
    /// use caldero_core::types::TipRate;
    /// use rust_decimal::Decimal;
    ///
    /// let subtotal = Money::from_cents(3333);            // $33.33
    /// let rate = TipRate::from_percent(Decimal::from(15));
    /// assert_eq!(subtotal.percentage(rate), Some(Money::from_cents(500))); // $5.00
    /// ```
    pub fn percentage(&self, rate: TipRate) -> Option<Money> {
        let tip = Decimal::new(self.0, 2)
            .checked_mul(rate.percent())?
            .checked_div(Decimal::ONE_HUNDRED)?
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        tip.checked_mul(Decimal::ONE_HUNDRED)?.to_i64().map(Money)
    }

    /// Checked addition, `None` on overflow.
    #[inline]
    pub const fn checked_add(self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain `$1234.56` rendering for logs and debugging.
///
/// Customer-facing text goes through [`crate::currency::CurrencyFormat`],
/// which adds thousands grouping.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.pesos().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

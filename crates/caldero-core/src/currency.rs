//! # Currency Formatting
//!
//! Fixed-format rendering of [`Money`] for the customer: sign, symbol,
//! grouped pesos, two centavo digits. No runtime locale database is
//! consulted; the format is a plain value passed by reference.

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Display conventions for a single currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub group_separator: char,
    pub decimal_separator: char,
}

impl CurrencyFormat {
    /// Mexican peso: `$1,234.56`.
    pub fn es_mx() -> Self {
        CurrencyFormat {
            symbol: "$".to_string(),
            group_separator: ',',
            decimal_separator: '.',
        }
    }

    /// Formats an amount.
    ///
    /// ```rust
    /// use caldero_core::{CurrencyFormat, Money};
    ///
    /// let mxn = CurrencyFormat::es_mx();
    /// assert_eq!(mxn.format(Money::from_pesos(80)), "$80.00");
    /// assert_eq!(mxn.format(Money::from_cents(123_456_789)), "$1,234,567.89");
    /// ```
    pub fn format(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        let pesos = amount.pesos().unsigned_abs().to_string();

        let mut grouped = String::with_capacity(pesos.len() + pesos.len() / 3);
        for (i, digit) in pesos.chars().enumerate() {
            if i > 0 && (pesos.len() - i) % 3 == 0 {
                grouped.push(self.group_separator);
            }
            grouped.push(digit);
        }

        format!(
            "{}{}{}{}{:02}",
            sign,
            self.symbol,
            grouped,
            self.decimal_separator,
            amount.cents_part()
        )
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        CurrencyFormat::es_mx()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_small_amounts() {
        let mxn = CurrencyFormat::es_mx();
        assert_eq!(mxn.format(Money::zero()), "$0.00");
        assert_eq!(mxn.format(Money::from_cents(1)), "$0.01");
        assert_eq!(mxn.format(Money::from_cents(3333)), "$33.33");
        assert_eq!(mxn.format(Money::from_pesos(270)), "$270.00");
    }

    #[test]
    fn test_format_grouping() {
        let mxn = CurrencyFormat::es_mx();
        assert_eq!(mxn.format(Money::from_pesos(1_000)), "$1,000.00");
        assert_eq!(mxn.format(Money::from_pesos(999_999)), "$999,999.00");
        assert_eq!(mxn.format(Money::from_cents(123_456_789)), "$1,234,567.89");
    }

    #[test]
    fn test_format_negative() {
        let mxn = CurrencyFormat::es_mx();
        assert_eq!(mxn.format(Money::from_cents(-550)), "-$5.50");
        assert_eq!(mxn.format(Money::from_cents(-123_456)), "-$1,234.56");
    }

    #[test]
    fn test_custom_separators() {
        let eur_like = CurrencyFormat {
            symbol: "€".to_string(),
            group_separator: '.',
            decimal_separator: ',',
        };
        assert_eq!(eur_like.format(Money::from_cents(123_456)), "€1.234,56");
    }
}

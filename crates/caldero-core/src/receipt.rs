//! # Receipt
//!
//! Pricing and ticket rendering for a finished order.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Order lines ──► Σ unit_price × qty ──► subtotal (exact)                │
//! │                                              │                          │
//! │                          tip rate? ──────────┤                          │
//! │                                              ▼                          │
//! │                        tip = round(subtotal × rate / 100, 2)            │
//! │                                              │                          │
//! │                                              ▼                          │
//! │                        total = round(subtotal + tip, 2)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rounding is half away from zero (see [`Money::percentage`]). Subtotal and
//! tip are whole centavos, so the total is their plain sum.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::currency::CurrencyFormat;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::order::{Order, OrderLine};
use crate::types::TipRate;

const DOUBLE_RULE: &str = "===================================";
const SINGLE_RULE: &str = "-----------------------------------";

/// A priced, read-only snapshot of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub lines: Vec<OrderLine>,
    pub subtotal: Money,
    /// `None` when the customer declined to tip.
    pub tip_rate: Option<TipRate>,
    pub tip: Money,
    pub total: Money,
    pub issued_at: NaiveDateTime,
}

impl Receipt {
    /// Prices `order`.
    ///
    /// ## Errors
    /// - [`CoreError::TipRateOutOfRange`] if the rate is outside 0-1000 %
    /// - [`CoreError::QuantityOverflow`] if the totals do not fit
    pub fn build(
        order: &Order,
        tip_rate: Option<TipRate>,
        issued_at: NaiveDateTime,
    ) -> CoreResult<Self> {
        if let Some(rate) = tip_rate {
            TipRate::checked(rate.percent())?;
        }

        let subtotal = order.subtotal()?;
        let tip = match tip_rate {
            Some(rate) => subtotal
                .percentage(rate)
                .ok_or_else(|| CoreError::QuantityOverflow {
                    name: "tip".to_string(),
                })?,
            None => Money::zero(),
        };
        let total = subtotal
            .checked_add(tip)
            .ok_or_else(|| CoreError::QuantityOverflow {
                name: "total".to_string(),
            })?;

        Ok(Receipt {
            lines: order.lines().to_vec(),
            subtotal,
            tip_rate,
            tip,
            total,
            issued_at,
        })
    }

    /// Renders the printed ticket.
    pub fn render(&self, currency: &CurrencyFormat) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{DOUBLE_RULE}");
        let _ = writeln!(out, "     🧾 Ticket de compra 🧾");
        let _ = writeln!(out, "{DOUBLE_RULE}");
        let _ = writeln!(out, "Fecha: {}", self.issued_at.format("%d/%m/%Y %H:%M"));
        let _ = writeln!(out, "Platillos pedidos:");

        for line in &self.lines {
            let _ = writeln!(
                out,
                "- {} x{}  @ {}  = {}",
                line.name,
                line.quantity,
                currency.format(line.unit_price),
                currency.format(line.line_total())
            );
        }

        let _ = writeln!(out, "{SINGLE_RULE}");
        let _ = writeln!(out, "Subtotal: {}", currency.format(self.subtotal));
        match self.tip_rate {
            Some(rate) => {
                let _ = writeln!(out, "Propina ({}): {}", rate, currency.format(self.tip));
            }
            None => {
                let _ = writeln!(out, "Propina:  {}", currency.format(self.tip));
            }
        }
        let _ = writeln!(out, "TOTAL A PAGAR: {}", currency.format(self.total));
        let _ = writeln!(out, "{DOUBLE_RULE}");
        let _ = writeln!(out, "Gracias por su compra (👉 ﾟヮﾟ) 👉");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{Menu, MenuItem};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn rate(percent: i64) -> Option<TipRate> {
        Some(TipRate::from_percent(Decimal::from(percent)))
    }

    /// Tacos×3 + Agua×1 = $270.00
    fn sample_order() -> Order {
        let menu = Menu::new(vec![
            MenuItem::new("Tacos", Money::from_pesos(80)),
            MenuItem::new("Agua", Money::from_pesos(30)),
        ]);
        let mut order = Order::new();
        order.add(&menu, menu.by_position(1).unwrap(), 2).unwrap();
        order.add(&menu, menu.by_position(2).unwrap(), 1).unwrap();
        order.add(&menu, menu.by_position(1).unwrap(), 1).unwrap();
        order
    }

    fn single_line(price_cents: i64) -> Order {
        let menu = Menu::new(vec![MenuItem::new("Plato", Money::from_cents(price_cents))]);
        let mut order = Order::new();
        order.add(&menu, menu.by_position(1).unwrap(), 1).unwrap();
        order
    }

    #[test]
    fn test_ten_percent_tip() {
        let receipt = Receipt::build(&sample_order(), rate(10), noon()).unwrap();
        assert_eq!(receipt.subtotal, Money::from_pesos(270));
        assert_eq!(receipt.tip, Money::from_pesos(27));
        assert_eq!(receipt.total, Money::from_pesos(297));
    }

    #[test]
    fn test_zero_percent_tip_opted_in() {
        let receipt = Receipt::build(&sample_order(), rate(0), noon()).unwrap();
        assert!(receipt.tip.is_zero());
        assert_eq!(receipt.total, Money::from_pesos(270));
        assert!(receipt.tip_rate.is_some());
    }

    #[test]
    fn test_declined_tip() {
        let receipt = Receipt::build(&sample_order(), None, noon()).unwrap();
        assert!(receipt.tip.is_zero());
        assert_eq!(receipt.total, Money::from_pesos(270));
        assert!(receipt.tip_rate.is_none());
    }

    #[test]
    fn test_rounding_boundary() {
        // $33.33 × 15% = $4.9995 → $5.00
        let receipt = Receipt::build(&single_line(3333), rate(15), noon()).unwrap();
        assert_eq!(receipt.tip, Money::from_cents(500));
        assert_eq!(receipt.total, Money::from_cents(3833));
    }

    #[test]
    fn test_rejects_out_of_range_rate() {
        let too_high = Some(TipRate::from_percent(Decimal::from(1001)));
        assert!(matches!(
            Receipt::build(&sample_order(), too_high, noon()),
            Err(CoreError::TipRateOutOfRange { .. })
        ));
    }

    #[test]
    fn test_tip_too_large_is_an_error() {
        let order = single_line(i64::MAX / 4);
        match Receipt::build(&order, rate(1000), noon()) {
            Err(CoreError::QuantityOverflow { name }) => assert_eq!(name, "tip"),
            other => panic!("expected overflow, got {other:?}"),
        }
        assert!(Receipt::build(&order, None, noon()).is_ok());
    }

    #[test]
    fn test_subtotal_too_large_is_an_error() {
        let half = i64::MAX / 2 + 1;
        let menu = Menu::new(vec![
            MenuItem::new("Banquete", Money::from_cents(half)),
            MenuItem::new("Festín", Money::from_cents(half)),
        ]);
        let mut order = Order::new();
        order.add(&menu, menu.by_position(1).unwrap(), 1).unwrap();
        order.add(&menu, menu.by_position(2).unwrap(), 1).unwrap();

        assert!(matches!(
            Receipt::build(&order, None, noon()),
            Err(CoreError::QuantityOverflow { .. })
        ));
    }

    #[test]
    fn test_render_with_tip() {
        let receipt = Receipt::build(&sample_order(), rate(10), noon()).unwrap();
        let text = receipt.render(&CurrencyFormat::es_mx());

        let expected = "\
===================================
     🧾 Ticket de compra 🧾
===================================
Fecha: 18/10/2026 12:00
Platillos pedidos:
- Tacos x3  @ $80.00  = $240.00
- Agua x1  @ $30.00  = $30.00
-----------------------------------
Subtotal: $270.00
Propina (10%): $27.00
TOTAL A PAGAR: $297.00
===================================
Gracias por su compra (👉 ﾟヮﾟ) 👉
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_without_tip() {
        let receipt = Receipt::build(&sample_order(), None, noon()).unwrap();
        let text = receipt.render(&CurrencyFormat::es_mx());
        assert!(text.contains("Propina:  $0.00\n"));
        assert!(text.contains("TOTAL A PAGAR: $270.00\n"));
    }

    #[test]
    fn test_serializes_to_json() {
        let receipt = Receipt::build(&sample_order(), rate(10), noon()).unwrap();
        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["subtotal"], 27_000);
        assert_eq!(json["tip"], 2_700);
        assert_eq!(json["total"], 29_700);
        assert_eq!(json["lines"].as_array().map(Vec::len), Some(2));
    }
}

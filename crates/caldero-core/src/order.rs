//! # Order Aggregation
//!
//! Accumulates the customer's selections for one session.
//!
//! ## Merge on Insert
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Selection            Order lines afterwards                            │
//! │  ──────────────────   ───────────────────────────────────────────────   │
//! │  Tacos × 2            [Tacos × 2]                                       │
//! │  Agua  × 1            [Tacos × 2, Agua × 1]                             │
//! │  Tacos × 1            [Tacos × 3, Agua × 1]   ◄── merged, order kept    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no removal or decrease; quantities only grow.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::menu::{ItemId, Menu};
use crate::money::Money;

/// One dish in the order with its merged quantity.
///
/// Name and unit price are copied from the menu when the line is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub item: ItemId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: i64,
}

impl OrderLine {
    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

/// The customer's deduplicated selections, in first-selected order.
///
/// ## Invariants
/// - At most one line per [`ItemId`]
/// - Every quantity is ≥ 1
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    lines: Vec<OrderLine>,
}

impl Order {
    pub fn new() -> Self {
        Order::default()
    }

    /// Adds `quantity` portions of a dish, merging into an existing line.
    ///
    /// ## Errors
    /// - [`CoreError::UnknownItem`] if `item` is not on `menu`
    /// - [`CoreError::InvalidQuantity`] if `quantity` < 1
    /// - [`CoreError::QuantityOverflow`] if the merged quantity or line
    ///   total would not fit
    pub fn add(&mut self, menu: &Menu, item: ItemId, quantity: i64) -> CoreResult<()> {
        let dish = menu.get(item).ok_or(CoreError::UnknownItem(item.index()))?;
        if quantity < 1 {
            return Err(CoreError::InvalidQuantity(quantity));
        }

        let overflow = || CoreError::QuantityOverflow {
            name: dish.name().to_string(),
        };

        if let Some(line) = self.lines.iter_mut().find(|l| l.item == item) {
            let merged = line.quantity.checked_add(quantity).ok_or_else(overflow)?;
            line.unit_price.cents().checked_mul(merged).ok_or_else(overflow)?;
            line.quantity = merged;
            return Ok(());
        }

        dish.price().cents().checked_mul(quantity).ok_or_else(overflow)?;
        self.lines.push(OrderLine {
            item,
            name: dish.name().to_string(),
            unit_price: dish.price(),
            quantity,
        });
        Ok(())
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct dishes.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Portions across all lines, saturating at `i64::MAX`.
    pub fn total_quantity(&self) -> i64 {
        self.lines
            .iter()
            .fold(0i64, |acc, line| acc.saturating_add(line.quantity))
    }

    /// Exact sum of line totals, no rounding.
    ///
    /// ## Errors
    /// [`CoreError::QuantityOverflow`] naming the first line that pushes the
    /// sum past what `Money` can hold.
    pub fn subtotal(&self) -> CoreResult<Money> {
        self.lines.iter().try_fold(Money::zero(), |acc, line| {
            acc.checked_add(line.line_total())
                .ok_or_else(|| CoreError::QuantityOverflow {
                    name: line.name.clone(),
                })
        })
    }
}

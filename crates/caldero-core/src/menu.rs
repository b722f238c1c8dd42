//! # Menu Catalog
//!
//! The fixed, ordered list of dishes the counter sells.
//!
//! ## Identity
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Position shown to customer   ItemId (internal)   MenuItem              │
//! │  ──────────────────────────   ─────────────────   ────────────────────  │
//! │  1                            ItemId(0)           Tacos al pastor $80   │
//! │  2                            ItemId(1)           Enchiladas verdes $75 │
//! │  3                            ItemId(2)           Pozole $80            │
//! │  ...                                                                    │
//! │                                                                         │
//! │  Orders compare ItemId, never names: two dishes may share a name and    │
//! │  still be separate lines.                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::currency::CurrencyFormat;
use crate::money::Money;

/// Stable index of a dish within its [`Menu`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(usize);

impl ItemId {
    /// Zero-based index into the menu.
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }

    /// One-based position as shown to the customer.
    #[inline]
    pub const fn position(&self) -> usize {
        self.0 + 1
    }
}

/// A dish on the menu. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    name: String,
    price: Money,
}

impl MenuItem {
    /// Creates a dish. The price must not be negative.
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        debug_assert!(!price.is_negative(), "Menu prices cannot be negative");
        MenuItem {
            name: name.into(),
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }
}

/// Ordered, read-only menu catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Menu { items }
    }

    /// The dishes served at El caldero chorreante.
    pub fn house() -> Self {
        Menu::new(vec![
            MenuItem::new("Tacos al pastor", Money::from_pesos(80)),
            MenuItem::new("Enchiladas verdes", Money::from_pesos(75)),
            MenuItem::new("Pozole", Money::from_pesos(80)),
            MenuItem::new("Tostadas de pollo", Money::from_pesos(65)),
            MenuItem::new("Agua fresca", Money::from_pesos(30)),
        ])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up a dish by id.
    pub fn get(&self, id: ItemId) -> Option<&MenuItem> {
        self.items.get(id.0)
    }

    /// Resolves a 1-based position typed by the customer.
    pub fn by_position(&self, position: usize) -> Option<ItemId> {
        (1..=self.items.len())
            .contains(&position)
            .then(|| ItemId(position - 1))
    }

    /// Iterates dishes with their ids, in menu order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &MenuItem)> {
        self.items.iter().enumerate().map(|(i, item)| (ItemId(i), item))
    }

    /// Renders the menu block shown before every selection.
    ///
    /// ```text
    /// Menú del día:
    /// 1. Tacos al pastor - $80.00
    /// 2. Enchiladas verdes - $75.00
    /// ```
    pub fn render(&self, currency: &CurrencyFormat) -> String {
        let mut out = String::from("Menú del día:\n");
        for (id, item) in self.iter() {
            let _ = writeln!(
                out,
                "{}. {} - {}",
                id.position(),
                item.name(),
                currency.format(item.price())
            );
        }
        out
    }
}

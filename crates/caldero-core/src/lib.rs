//! # caldero-core: Pure Business Logic for the Caldero Counter
//!
//! This crate holds every rule of the ticket calculator as pure functions
//! with zero I/O dependencies. The terminal app (`caldero-terminal`) owns
//! prompting, reading, and printing; everything it decides is decided here.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Caldero Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 caldero-terminal (stdin/stdout)                 │   │
//! │  │   Menu display ──► Selection ──► Continue? ──► Tip ──► Ticket   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ caldero-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐  │   │
//! │  │   │   menu   │ │  order   │ │ receipt  │ │   validation     │  │   │
//! │  │   │ MenuItem │ │ OrderLine│ │ Receipt  │ │ integer/decimal/ │  │   │
//! │  │   │  ItemId  │ │  merge   │ │ render   │ │     yes-no       │  │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────────┘  │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐                       │   │
//! │  │   │  money   │ │  types   │ │ currency │                       │   │
//! │  │   │  Money   │ │ TipRate  │ │  es-MX   │                       │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘                       │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • PURE FUNCTIONS                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer centavo arithmetic
//! - [`types`] - Small value types ([`TipRate`], a `rust_decimal` percentage)
//! - [`menu`] - The fixed menu catalog
//! - [`order`] - Order aggregation (merge on repeated selection)
//! - [`receipt`] - Pricing and ticket rendering
//! - [`currency`] - Currency display format
//! - [`validation`] - Parsing and bounds checks for typed user input
//! - [`error`] - Error types
//!
//! ## Example Usage
//!
//! ```rust
//! use caldero_core::{Menu, Order, Receipt, TipRate};
//! use rust_decimal::Decimal;
//! use chrono::NaiveDate;
//!
//! let menu = Menu::house();
//! let tacos = menu.by_position(1).unwrap();
//!
//! let mut order = Order::new();
//! order.add(&menu, tacos, 2).unwrap();
//!
//! let issued_at = NaiveDate::from_ymd_opt(2026, 10, 18)
//!     .unwrap()
//!     .and_hms_opt(12, 0, 0)
//!     .unwrap();
//! let tip = TipRate::from_percent(Decimal::from(10));
//! let receipt = Receipt::build(&order, Some(tip), issued_at).unwrap();
//!
//! assert_eq!(receipt.subtotal.cents(), 16_000);
//! assert_eq!(receipt.tip.cents(), 1_600);
//! assert_eq!(receipt.total.cents(), 17_600);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod currency;
pub mod error;
pub mod menu;
pub mod money;
pub mod order;
pub mod receipt;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use currency::CurrencyFormat;
pub use error::{CoreError, CoreResult, InputError};
pub use menu::{ItemId, Menu, MenuItem};
pub use money::Money;
pub use order::{Order, OrderLine};
pub use receipt::Receipt;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity accepted for a single selection (a 32-bit count).
///
/// Repeated selections of the same dish may add up past this value.
pub const MAX_ITEM_QUANTITY: i64 = i32::MAX as i64;

/// Lowest tip percentage the counter accepts.
pub const MIN_TIP_PERCENT: i64 = 0;

/// Highest tip percentage the counter accepts.
pub const MAX_TIP_PERCENT: i64 = 1000;

//! # Terminal Configuration
//!
//! Settings built once at startup and passed by reference to the session.
//!
//! ## Configuration Sources
//! Compiled-in defaults only. The counter reads no config file and no
//! environment variables; `RUST_LOG` tunes diagnostics and nothing else.
//!
//! Configuration is read-only after construction, so it is shared as `&`.

use caldero_core::{CurrencyFormat, MAX_ITEM_QUANTITY, MAX_TIP_PERCENT, MIN_TIP_PERCENT};
use rust_decimal::Decimal;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct TerminalConfig {
    /// Restaurant name, used in the welcome banner.
    pub store_name: String,

    /// Greeting printed once when the session starts.
    pub welcome_banner: String,

    /// Currency display for prices and totals.
    pub currency: CurrencyFormat,

    /// Upper bound for a single quantity prompt.
    pub max_quantity: i64,

    /// Tip percentage bounds for the decimal prompt.
    pub min_tip_percent: Decimal,
    pub max_tip_percent: Decimal,

    /// Clear the screen before printing the ticket.
    pub clear_before_ticket: bool,
}

impl Default for TerminalConfig {
    /// Defaults for El caldero chorreante.
    ///
    /// ## Default Values
    /// - Currency: Mexican peso (`$1,234.56`)
    /// - Quantity: 1-2147483647 per selection
    /// - Tip: 0-1000 %
    /// - Screen clearing: off (the binary enables it on a real terminal)
    fn default() -> Self {
        let store_name = "El caldero chorreante".to_string();
        TerminalConfig {
            welcome_banner: format!("🧙‍♂ Bienvenido al Restaurante '{}'", store_name),
            store_name,
            currency: CurrencyFormat::es_mx(),
            max_quantity: MAX_ITEM_QUANTITY,
            min_tip_percent: Decimal::from(MIN_TIP_PERCENT),
            max_tip_percent: Decimal::from(MAX_TIP_PERCENT),
            clear_before_ticket: false,
        }
    }
}

impl TerminalConfig {
    /// Enables or disables clearing the screen before the ticket.
    pub fn with_clear_before_ticket(mut self, clear: bool) -> Self {
        self.clear_before_ticket = clear;
        self
    }
}

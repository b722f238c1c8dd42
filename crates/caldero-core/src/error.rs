//! # Error Types
//!
//! Domain-specific error types for caldero-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  caldero-core errors (this file)                                       │
//! │  ├── InputError  - Typed text the user must re-enter                   │
//! │  └── CoreError   - Domain rule violations                              │
//! │                                                                         │
//! │  caldero-terminal errors (app)                                         │
//! │  └── AppError    - I/O failures and core errors, fatal to the session  │
//! │                                                                         │
//! │  Flow: InputError → printed, re-prompt (never leaves the prompter)     │
//! │        CoreError  → AppError → stderr, exit code 1                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. `InputError` messages are exactly what the customer reads on screen
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Input Error
// =============================================================================

/// A line of user input that cannot be accepted.
///
/// The `Display` text of each variant is the diagnostic printed before the
/// prompt is shown again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Nothing but whitespace was typed.
    #[error("Entrada vacía, intente de nuevo.")]
    Empty,

    /// The text is not a whole number.
    #[error("Entrada inválida, ingrese un número entero.")]
    NotAnInteger,

    /// The text is not a number in either accepted notation.
    #[error("Entrada inválida, ingrese un número válido.")]
    NotANumber,

    /// The number parsed but lies outside the inclusive range.
    ///
    /// Bounds are kept as display strings so integer and decimal prompts
    /// share one variant.
    #[error("Valor fuera de rango ({min} - {max}).")]
    OutOfRange { min: String, max: String },

    /// A yes/no prompt got something other than s/si/n/no.
    #[error("Respuesta inválida, responda 's' o 'n'.")]
    UnrecognizedAnswer,
}

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// The terminal readers never produce values that trigger these; they guard
/// the core API against callers that bypass the readers.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Item id does not point into the menu.
    #[error("Menu item not found: {0}")]
    UnknownItem(usize),

    /// A selection must order at least one portion.
    #[error("Quantity must be at least 1, got {0}")]
    InvalidQuantity(i64),

    /// Merging a selection would overflow the line quantity.
    #[error("Quantity for {name} would overflow")]
    QuantityOverflow { name: String },

    /// Tip percentage outside the accepted range.
    #[error("Tip rate {rate}% is outside {min}-{max}%")]
    TipRateOutOfRange { rate: String, min: i64, max: i64 },

    /// Input error (wraps InputError).
    #[error("Invalid input: {0}")]
    Input(#[from] InputError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Convenience type alias for Results with InputError.
pub type InputResult<T> = Result<T, InputError>;

// =============================================================================
// Unit Tests
// =============================================================================

//! # Validation Module
//!
//! Parsing and bounds checks for the text a customer types at a prompt.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      One Line of Input                                  │
//! │                                                                         │
//! │  "  12,5 \n"                                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  blank? ───────────────► InputError::Empty                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  parses? ──── no ──────► InputError::NotAnInteger / NotANumber          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  min ≤ v ≤ max? ─ no ──► InputError::OutOfRange { min, max }            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Ok(v)                                                                  │
//! │                                                                         │
//! │  The terminal prompter prints the error and asks again; nothing here    │
//! │  ever loops or touches stdin.                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Decimal Notation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Two notations are accepted, tried in order:                            │
//! │                                                                         │
//! │  1. comma decimal     decimal ','  group '.'   "1.234,5"                │
//! │  2. period decimal    decimal '.'  group ','   "1,234.5"                │
//! │                                                                         │
//! │  Groups must be well formed (1-3 leading digits, then exactly 3), so    │
//! │  "12.5" is NOT a grouped 125 in notation 1 and falls through to 2.      │
//! │                                                                         │
//! │  "12,5"  → 12.5 (1)        "12.5"  → 12.5 (2)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Either way the text is rewritten to plain `-1234.5` form and handed to
//! `Decimal::from_str`. Digits past the fourth fractional place are rounded
//! half away from zero.
//!
//! ## Usage
//! ```rust
//! use caldero_core::validation::{parse_bounded_integer, parse_yes_no};
//!
//! assert_eq!(parse_bounded_integer(" 3 ", 1, 5), Ok(3));
//! assert_eq!(parse_yes_no("SI"), Ok(true));
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::error::{InputError, InputResult};

/// Fractional digits kept from a typed decimal.
const DECIMAL_PLACES: u32 = 4;

/// Separator characters for one textual number notation.
#[derive(Debug, Clone, Copy)]
struct Notation {
    decimal: char,
    group: char,
}

const COMMA_DECIMAL: Notation = Notation {
    decimal: ',',
    group: '.',
};

const PERIOD_DECIMAL: Notation = Notation {
    decimal: '.',
    group: ',',
};

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses a whole number within `min..=max`.
///
/// Surrounding whitespace and a leading `+`/`-` are accepted.
pub fn parse_bounded_integer(input: &str, min: i64, max: i64) -> InputResult<i64> {
    let text = non_blank(input)?;
    let value: i64 = text.parse().map_err(|_| InputError::NotAnInteger)?;
    within(value, min, max)
}

/// Parses a decimal within `min..=max`.
///
/// Comma and period both work as the decimal separator; see
/// [`parse_decimal`] for the exact notation rules.
pub fn parse_bounded_decimal(input: &str, min: Decimal, max: Decimal) -> InputResult<Decimal> {
    let text = non_blank(input)?;
    let value = parse_decimal(text).ok_or(InputError::NotANumber)?;
    within(value, min, max)
}

/// Parses a decimal in comma notation, falling back to period notation.
///
/// ```rust
/// use caldero_core::validation::parse_decimal;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_decimal("12,5"), Some(Decimal::new(125, 1)));
/// assert_eq!(parse_decimal("1.234,5"), parse_decimal("1,234.5"));
/// assert_eq!(parse_decimal("doce"), None);
/// ```
pub fn parse_decimal(input: &str) -> Option<Decimal> {
    [COMMA_DECIMAL, PERIOD_DECIMAL]
        .into_iter()
        .find_map(|notation| {
            let plain = plain_decimal(input, notation)?;
            Decimal::from_str(&plain).ok()
        })
        .map(|value| {
            value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        })
}

// =============================================================================
// Answer Validators
// =============================================================================

/// Parses a Spanish yes/no answer, case-insensitively.
///
/// | Input          | Result |
/// |----------------|--------|
/// | `s`, `si`      | `true` |
/// | `n`, `no`      | `false`|
/// | blank          | [`InputError::Empty`] |
/// | anything else  | [`InputError::UnrecognizedAnswer`] |
pub fn parse_yes_no(input: &str) -> InputResult<bool> {
    let answer = non_blank(input)?.to_lowercase();
    match answer.as_str() {
        "s" | "si" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err(InputError::UnrecognizedAnswer),
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn non_blank(input: &str) -> InputResult<&str> {
    let text = input.trim();
    if text.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(text)
}

/// Rewrites `input` from `notation` into `[-]digits[.digits]`.
///
/// Accepts surrounding whitespace, an optional leading `+`/`-`, optional
/// well-formed thousands groups, and an optional fractional part.
fn plain_decimal(input: &str, notation: Notation) -> Option<String> {
    let text = input.trim();
    let (sign, unsigned) = match text.chars().next()? {
        '-' => ("-", &text[1..]),
        '+' => ("", &text[1..]),
        _ => ("", text),
    };

    let (integer_text, fraction) = match unsigned.split_once(notation.decimal) {
        Some((integer, fraction)) => (integer, fraction),
        None => (unsigned, ""),
    };
    let integer = ungroup(integer_text, notation.group)?;
    if !fraction.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    match (integer.is_empty(), fraction.is_empty()) {
        (true, true) => None,
        (_, true) => Some(format!("{sign}{integer}")),
        (true, false) => Some(format!("{sign}0.{fraction}")),
        (false, false) => Some(format!("{sign}{integer}.{fraction}")),
    }
}

/// Strips well-formed group separators from an integer part.
///
/// Returns the bare digits, or `None` if a non-digit appears or the groups
/// are malformed. An empty integer part (".5") is allowed.
fn ungroup(text: &str, group: char) -> Option<String> {
    if !text.contains(group) {
        return text.chars().all(|c| c.is_ascii_digit()).then(|| text.to_string());
    }

    let mut digits = String::with_capacity(text.len());
    for (index, chunk) in text.split(group).enumerate() {
        let well_formed = if index == 0 {
            (1..=3).contains(&chunk.len())
        } else {
            chunk.len() == 3
        };
        if !well_formed || !chunk.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        digits.push_str(chunk);
    }
    Some(digits)
}

fn within<T: PartialOrd + ToString>(value: T, min: T, max: T) -> InputResult<T> {
    if value < min || value > max {
        return Err(InputError::OutOfRange {
            min: min.to_string(),
            max: max.to_string(),
        });
    }
    Ok(value)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn out_of_range(min: &str, max: &str) -> InputError {
        InputError::OutOfRange {
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    #[test]
    fn test_parse_bounded_integer_sequence() {
        let results: Vec<_> = ["", "abc", "0", "6", "3"]
            .iter()
            .map(|input| parse_bounded_integer(input, 1, 5))
            .collect();

        assert_eq!(
            results,
            vec![
                Err(InputError::Empty),
                Err(InputError::NotAnInteger),
                Err(out_of_range("1", "5")),
                Err(out_of_range("1", "5")),
                Ok(3),
            ]
        );
    }

    #[test]
    fn test_parse_bounded_integer_forms() {
        assert_eq!(parse_bounded_integer("   \t", 1, 5), Err(InputError::Empty));
        assert_eq!(parse_bounded_integer(" 4\n", 1, 5), Ok(4));
        assert_eq!(parse_bounded_integer("+2", 1, 5), Ok(2));
        assert_eq!(parse_bounded_integer("2.0", 1, 5), Err(InputError::NotAnInteger));
        assert_eq!(parse_bounded_integer("-1", -5, 5), Ok(-1));
        assert_eq!(
            parse_bounded_integer("99999999999999999999", 1, 5),
            Err(InputError::NotAnInteger)
        );
    }

    #[test]
    fn test_parse_bounded_decimal() {
        let min = Decimal::ZERO;
        let max = Decimal::from(1000);
        let twelve_and_a_half = Decimal::new(125, 1);

        assert_eq!(parse_bounded_decimal("12,5", min, max), Ok(twelve_and_a_half));
        assert_eq!(parse_bounded_decimal("12.5", min, max), Ok(twelve_and_a_half));
        assert_eq!(parse_bounded_decimal("1000", min, max), Ok(max));
        assert_eq!(parse_bounded_decimal("0", min, max), Ok(min));
        assert_eq!(parse_bounded_decimal("", min, max), Err(InputError::Empty));
        assert_eq!(parse_bounded_decimal("diez", min, max), Err(InputError::NotANumber));
        assert_eq!(
            parse_bounded_decimal("1000,01", min, max),
            Err(out_of_range("0", "1000"))
        );
        assert_eq!(
            parse_bounded_decimal("-1", min, max),
            Err(out_of_range("0", "1000"))
        );
    }

    #[test]
    fn test_parse_decimal_grouped_input() {
        let expected = Some(Decimal::new(12_345, 1));
        assert_eq!(parse_decimal("1.234,5"), expected);
        assert_eq!(parse_decimal("1,234.5"), expected);
        assert_eq!(parse_decimal("1.000"), Some(Decimal::from(1000)));
    }

    #[test]
    fn test_parse_decimal_comma_notation_wins_when_ambiguous() {
        // "1,500" reads as one and a half, not fifteen hundred
        assert_eq!(parse_decimal("1,500"), Some(Decimal::new(15, 1)));
    }

    #[test]
    fn test_parse_decimal_signs_and_partial_forms() {
        assert_eq!(parse_decimal("-3,25"), Some(Decimal::new(-325, 2)));
        assert_eq!(parse_decimal("+7"), Some(Decimal::from(7)));
        assert_eq!(parse_decimal(".5"), Some(Decimal::new(5, 1)));
        assert_eq!(parse_decimal("8."), Some(Decimal::from(8)));
        assert_eq!(parse_decimal("  12.5 \n"), Some(Decimal::new(125, 1)));
    }

    #[test]
    fn test_parse_decimal_rejects_garbage() {
        for input in ["", "-", ".", "abc", "1.2.3", "12,34,5", "10%", "1_000", "1e3"] {
            assert_eq!(parse_decimal(input), None, "{input:?}");
        }
        assert_eq!(parse_decimal(&"9".repeat(40)), None);
    }

    #[test]
    fn test_parse_decimal_rounds_past_four_places() {
        assert_eq!(parse_decimal("0.00005"), Some(Decimal::new(1, 4)));
        assert_eq!(parse_decimal("0.00004"), Some(Decimal::ZERO));
        assert_eq!(parse_decimal("-0.00005"), Some(Decimal::new(-1, 4)));
    }

    #[test]
    fn test_parse_yes_no() {
        for yes in ["S", "s", "si", "SI", "Si", " si \n"] {
            assert_eq!(parse_yes_no(yes), Ok(true), "{yes:?}");
        }
        for no in ["n", "N", "No", "NO", "no"] {
            assert_eq!(parse_yes_no(no), Ok(false), "{no:?}");
        }
        assert_eq!(parse_yes_no("maybe"), Err(InputError::UnrecognizedAnswer));
        assert_eq!(parse_yes_no("yes"), Err(InputError::UnrecognizedAnswer));
        assert_eq!(parse_yes_no("  "), Err(InputError::Empty));
    }
}

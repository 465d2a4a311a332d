//! # Price Module
//!
//! Coerces the many shapes a price arrives in to one exact decimal.
//!
//! ## Why Decimal?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌                                  │
//! │    19.99_f64 is really 19.989999999999998436805981327779591083526611…   │
//! │                                                                         │
//! │  A price lookup must match no matter how the caller wrote the value:   │
//! │                                                                         │
//! │    Decimal 12.50  ──┐                                                   │
//! │    f64     12.5   ──┼──► PriceInput::to_decimal() ──► 12.5 ──► "12.5"   │
//! │    &str   "12.50" ──┘                                normalize_price    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Floats go through their shortest round-trip text (`12.5_f64` prints as
//! `12.5`), never through their binary expansion.

use rust_decimal::Decimal;

use crate::error::{DataValidationError, ValidationResult};

/// A price as supplied by a caller, before coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum PriceInput {
    Decimal(Decimal),
    Float(f64),
    Integer(i64),
    Text(String),
}

impl PriceInput {
    /// Converts the input to an exact decimal.
    ///
    /// ## Rules
    /// - Text is trimmed of surrounding spaces and double quotes
    /// - Scientific notation (`"1.25e1"`) is accepted
    /// - NaN and infinities are rejected
    ///
    /// ## Example
    /// ```rust
    /// use catalog_core::price::PriceInput;
    /// use rust_decimal::Decimal;
    ///
    /// let expected = Decimal::new(1250, 2);
    /// assert_eq!(PriceInput::from(12.5_f64).to_decimal().unwrap(), expected);
    /// assert_eq!(PriceInput::from(" \"12.50\" ").to_decimal().unwrap(), expected);
    /// assert!(PriceInput::from("twelve").to_decimal().is_err());
    /// ```
    pub fn to_decimal(&self) -> ValidationResult<Decimal> {
        match self {
            PriceInput::Decimal(value) => Ok(*value),
            PriceInput::Integer(value) => Ok(Decimal::from(*value)),
            PriceInput::Float(value) => {
                if !value.is_finite() {
                    return Err(DataValidationError::InvalidPrice {
                        value: value.to_string(),
                    });
                }
                parse_decimal(&value.to_string())
            }
            PriceInput::Text(text) => parse_decimal(text.trim_matches(|c| c == ' ' || c == '"')),
        }
    }
}

impl From<Decimal> for PriceInput {
    fn from(value: Decimal) -> Self {
        PriceInput::Decimal(value)
    }
}

impl From<f64> for PriceInput {
    fn from(value: f64) -> Self {
        PriceInput::Float(value)
    }
}

impl From<f32> for PriceInput {
    /// Widens through the shortest `f32` text so `19.99_f32` stays `19.99`.
    fn from(value: f32) -> Self {
        PriceInput::Text(value.to_string())
    }
}

impl From<i64> for PriceInput {
    fn from(value: i64) -> Self {
        PriceInput::Integer(value)
    }
}

impl From<i32> for PriceInput {
    fn from(value: i32) -> Self {
        PriceInput::Integer(i64::from(value))
    }
}

impl From<&str> for PriceInput {
    fn from(value: &str) -> Self {
        PriceInput::Text(value.to_string())
    }
}

impl From<String> for PriceInput {
    fn from(value: String) -> Self {
        PriceInput::Text(value)
    }
}

/// Parses decimal text, plain or scientific.
///
/// Text with more significant digits than a `Decimal` holds is rejected
/// rather than rounded.
pub fn parse_decimal(text: &str) -> ValidationResult<Decimal> {
    let parsed = if text.contains(['e', 'E']) {
        Decimal::from_scientific(text)
    } else {
        Decimal::from_str_exact(text)
    };

    parsed
        .map_err(|_| DataValidationError::InvalidPrice {
            value: text.to_string(),
        })
}

/// Returns the canonical stored form of a price.
///
/// Trailing zeros are stripped and negative zero folds to zero, so two
/// decimal-equal prices always produce the same text.
///
/// ```rust
/// use catalog_core::price::normalize_price;
/// use rust_decimal::Decimal;
///
/// assert_eq!(normalize_price(Decimal::new(1250, 2)), "12.5");
/// assert_eq!(normalize_price(Decimal::new(100, 0)), "100");
/// ```
pub fn normalize_price(price: Decimal) -> String {
    if price.is_zero() {
        return Decimal::ZERO.to_string();
    }
    price.normalize().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

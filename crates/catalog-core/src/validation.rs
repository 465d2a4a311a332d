//! # Validation Module
//!
//! Per-field checks applied when a product is read from a JSON mapping.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Web layer (outside this workspace)                           │
//! │  └── Parses the request body into a serde_json::Value                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Product::deserialize                                         │
//! │  ├── Shape check (must be an object)                                   │
//! │  ├── Key check (fixed attribute set)                                   │
//! │  └── THIS MODULE: per-field type checks                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── CHECK constraints (available, category)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every checker is strict: no truthy strings for booleans, no numeric
//! strings for prices.

use rust_decimal::Decimal;
use serde_json::Value;

use crate::error::{DataValidationError, ValidationResult};
use crate::price::parse_decimal;
use crate::types::Category;

/// Returns the JSON type name used in error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Requires a JSON string.
pub fn expect_string(field: &'static str, value: &Value) -> ValidationResult<String> {
    match value {
        Value::String(text) => Ok(text.clone()),
        other => Err(DataValidationError::invalid_type(
            "string",
            field,
            json_type_name(other),
        )),
    }
}

/// Requires a genuine JSON boolean.
///
/// ```rust
/// use catalog_core::validation::expect_bool;
/// use serde_json::json;
///
/// assert_eq!(expect_bool("available", &json!(true)).unwrap(), true);
/// assert!(expect_bool("available", &json!("yes")).is_err());
/// ```
pub fn expect_bool(field: &'static str, value: &Value) -> ValidationResult<bool> {
    match value {
        Value::Bool(flag) => Ok(*flag),
        other => Err(DataValidationError::invalid_type(
            "boolean",
            field,
            json_type_name(other),
        )),
    }
}

/// Requires a JSON number and converts it to an exact decimal.
///
/// The number's own text is parsed, so `12.50` keeps both digits. A number
/// with more significant digits than a `Decimal` holds is an
/// `InvalidPrice` error.
pub fn expect_price(field: &'static str, value: &Value) -> ValidationResult<Decimal> {
    match value {
        Value::Number(number) => parse_decimal(&number.to_string()),
        other => Err(DataValidationError::invalid_type(
            "numeric",
            field,
            json_type_name(other),
        )),
    }
}

/// Requires a category symbol from the closed set.
pub fn expect_category(field: &'static str, value: &Value) -> ValidationResult<Category> {
    match value {
        Value::String(name) => name.parse(),
        other => Err(DataValidationError::invalid_type(
            "string",
            field,
            json_type_name(other),
        )),
    }
}

/// Accepts an integer id or `null`.
pub fn expect_id(field: &'static str, value: &Value) -> ValidationResult<Option<i64>> {
    match value {
        Value::Null => Ok(None),
        Value::Number(number) => number
            .as_i64()
            .map(Some)
            .ok_or_else(|| DataValidationError::invalid_type("integer", field, "number")),
        other => Err(DataValidationError::invalid_type(
            "integer",
            field,
            json_type_name(other),
        )),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_expect_bool() {
        assert!(expect_bool("available", &json!(false)).is_ok());

        let err = expect_bool("available", &json!("yes")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid type for boolean [available]: string");

        // no numeric truthiness either
        assert!(expect_bool("available", &json!(1)).is_err());
    }

    #[test]
    fn test_expect_price() {
        assert_eq!(expect_price("price", &json!(12.5)).unwrap(), dec!(12.5));
        assert_eq!(expect_price("price", &json!(3)).unwrap(), dec!(3));

        let err = expect_price("price", &json!("12.50")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid type for numeric [price]: string");
    }

    #[test]
    fn test_expect_price_rejects_excess_precision() {
        let value: Value = serde_json::from_str("0.123456789012345678901234567891").unwrap();
        assert!(matches!(
            expect_price("price", &value),
            Err(DataValidationError::InvalidPrice { .. })
        ));

        let mut product = crate::types::Product::default();
        let err = product
            .deserialize_str(r#"{"price": 0.123456789012345678901234567891}"#)
            .unwrap_err();
        assert!(matches!(err, DataValidationError::InvalidPrice { .. }));
        assert_eq!(product.price, Decimal::ZERO);
    }

    #[test]
    fn test_expect_category() {
        assert_eq!(
            expect_category("category", &json!("FOOD")).unwrap(),
            Category::Food
        );
        assert!(matches!(
            expect_category("category", &json!("SHOES")),
            Err(DataValidationError::UnknownCategory { .. })
        ));
        assert!(matches!(
            expect_category("category", &json!(3)),
            Err(DataValidationError::InvalidType { .. })
        ));
    }

    #[test]
    fn test_expect_id() {
        assert_eq!(expect_id("id", &json!(null)).unwrap(), None);
        assert_eq!(expect_id("id", &json!(7)).unwrap(), Some(7));
        assert!(expect_id("id", &json!(7.5)).is_err());
        assert!(expect_id("id", &json!("7")).is_err());
    }

    #[test]
    fn test_expect_string() {
        assert_eq!(expect_string("name", &json!("Fedora")).unwrap(), "Fedora");
        assert!(expect_string("name", &json!(null)).is_err());
    }
}

//! # Error Types
//!
//! The validation error raised by the catalog domain.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  catalog-core errors (this file)                                       │
//! │  └── DataValidationError  - Every contract violation on a Product      │
//! │                                                                         │
//! │  catalog-db errors (separate crate)                                    │
//! │  └── DbError              - Store failures + wrapped validation        │
//! │                                                                         │
//! │  Flow: DataValidationError → DbError → web layer → user response       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending field, key or type in the message
//! 3. One error kind: callers match a single type, variants carry detail

use thiserror::Error;

/// Input validation errors for products.
///
/// All variants are the same error *kind*: a caller that only needs to
/// know "the request was invalid" matches on the type, and the message
/// says what was wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataValidationError {
    /// The request body was not a mapping (missing, null, a string, ...).
    #[error("Invalid product: body of request contained bad or no data {reason}")]
    BadData { reason: String },

    /// A key outside the product attribute set.
    #[error("Invalid attribute: {key}")]
    UnknownAttribute { key: String },

    /// A known attribute carried a value of the wrong JSON type.
    ///
    /// `expected` is the logical type ("numeric", "boolean", ...), `found`
    /// is the JSON type that was supplied.
    #[error("Invalid type for {expected} [{field}]: {found}")]
    InvalidType {
        expected: &'static str,
        field: &'static str,
        found: &'static str,
    },

    /// A category name outside the closed set.
    #[error("Invalid attribute: unknown category '{name}'")]
    UnknownCategory { name: String },

    /// A price that cannot be represented as a decimal.
    #[error("Invalid price: '{value}' is not a decimal number")]
    InvalidPrice { value: String },

    /// `update` or `delete` was called on a product that was never persisted.
    #[error("{operation} called with empty ID field")]
    MissingId { operation: &'static str },
}

impl DataValidationError {
    /// Creates a BadData error.
    pub fn bad_data(reason: impl Into<String>) -> Self {
        DataValidationError::BadData {
            reason: reason.into(),
        }
    }

    /// Creates an InvalidType error.
    pub fn invalid_type(expected: &'static str, field: &'static str, found: &'static str) -> Self {
        DataValidationError::InvalidType {
            expected,
            field,
            found,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with DataValidationError.
pub type ValidationResult<T> = Result<T, DataValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_id_message() {
        let err = DataValidationError::MissingId {
            operation: "Update",
        };
        assert_eq!(err.to_string(), "Update called with empty ID field");
    }

    #[test]
    fn test_invalid_type_message() {
        let err = DataValidationError::invalid_type("boolean", "available", "string");
        assert_eq!(
            err.to_string(),
            "Invalid type for boolean [available]: string"
        );
    }

    #[test]
    fn test_bad_data_message() {
        let err = DataValidationError::bad_data("(expected an object, found null)");
        assert!(err
            .to_string()
            .starts_with("Invalid product: body of request contained bad or no data"));
    }
}

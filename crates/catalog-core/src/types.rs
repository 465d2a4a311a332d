//! # Domain Types
//!
//! The catalog's domain types.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐          ┌─────────────────┐                   │
//! │  │      Product        │          │    Category     │                   │
//! │  │  ─────────────────  │          │  ─────────────  │                   │
//! │  │  id (Option<i64>)   │          │  Unknown        │                   │
//! │  │  name               │ ───────► │  Cloths         │                   │
//! │  │  description        │          │  Food           │                   │
//! │  │  price (Decimal)    │          │  Housewares     │                   │
//! │  │  available (bool)   │          │  Automotive     │                   │
//! │  │  category           │          │  Tools          │                   │
//! │  └─────────────────────┘          └─────────────────┘                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifecycle
//! A product with `id == None` is TRANSIENT. The store assigns the id on
//! insert, after which the product is PERSISTED and can be updated or
//! deleted.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DataValidationError;

// =============================================================================
// Category
// =============================================================================

/// The closed set of product categories.
///
/// Stored and serialized by symbolic name (`"CLOTHS"`, `"FOOD"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    #[default]
    Unknown,
    Cloths,
    Food,
    Housewares,
    Automotive,
    Tools,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 6] = [
        Category::Unknown,
        Category::Cloths,
        Category::Food,
        Category::Housewares,
        Category::Automotive,
        Category::Tools,
    ];

    /// Returns the symbolic name used for storage and serialization.
    pub const fn name(&self) -> &'static str {
        match self {
            Category::Unknown => "UNKNOWN",
            Category::Cloths => "CLOTHS",
            Category::Food => "FOOD",
            Category::Housewares => "HOUSEWARES",
            Category::Automotive => "AUTOMOTIVE",
            Category::Tools => "TOOLS",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = DataValidationError;

    /// Resolves a symbolic name. Matching is exact: `"cloths"` is unknown.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.name() == name)
            .ok_or_else(|| DataValidationError::UnknownCategory {
                name: name.to_string(),
            })
    }
}

// =============================================================================
// Product
// =============================================================================

/// A sellable catalog item.
///
/// `Deserialize` is implemented in [`crate::mapping`] on top of
/// [`Product::from_json`], so serde input is held to the same rules.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Product {
    /// Surrogate key assigned by the store. `None` until created.
    pub id: Option<i64>,

    /// Display name.
    pub name: String,

    /// Free-form description.
    pub description: String,

    /// Unit price. Compared with exact decimal semantics.
    #[serde(serialize_with = "rust_decimal::serde::arbitrary_precision::serialize")]
    pub price: Decimal,

    /// Whether the product can currently be sold.
    pub available: bool,

    pub category: Category,
}

impl Product {
    /// Creates a transient product (no id).
    ///
    /// ## Example
    /// ```rust
    /// use catalog_core::{Category, Product};
    /// use rust_decimal::Decimal;
    ///
    /// let hat = Product::new("Fedora", "A red hat", Decimal::new(1250, 2), true, Category::Cloths);
    /// assert_eq!(hat.id, None);
    /// assert_eq!(hat.to_string(), "<Product Fedora id=[None]>");
    /// ```
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        available: bool,
        category: Category,
    ) -> Self {
        Product {
            id: None,
            name: name.into(),
            description: description.into(),
            price,
            available,
            category,
        }
    }

    /// Whether the product has been written to the store.
    #[inline]
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "<Product {} id=[{}]>", self.name, id),
            None => write!(f, "<Product {} id=[None]>", self.name),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

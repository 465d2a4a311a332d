//! # catalog-core: Pure Domain Logic for the Product Catalog
//!
//! This crate holds the product model and every rule about what a valid
//! product looks like, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Catalog Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Web layer (external, not in this workspace)        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON body / query args                 │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ catalog-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   price   │  │  mapping  │  │ validation│  │   │
//! │  │   │  Product  │  │PriceInput │  │ serialize │  │  field    │  │   │
//! │  │   │  Category │  │ normalize │  │deserialize│  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  catalog-db (Database Layer)                    │   │
//! │  │            SQLite pool, migrations, ProductRepository           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Category)
//! - [`price`] - Price coercion to exact decimals
//! - [`mapping`] - JSON mapping form of a product
//! - [`validation`] - Per-field checks used by the mapping
//! - [`error`] - The validation error type
//! - `factory` - Randomized products (feature `fixtures`)
//!
//! ## Example Usage
//!
//! ```rust
//! use catalog_core::{Category, Product};
//! use serde_json::json;
//!
//! let product = Product::from_json(&json!({
//!     "name": "Fedora",
//!     "description": "A red hat",
//!     "price": 12.50,
//!     "available": true,
//!     "category": "CLOTHS"
//! }))
//! .unwrap();
//!
//! assert_eq!(product.category, Category::Cloths);
//! assert_eq!(product.serialize()["category"], json!("CLOTHS"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod mapping;
pub mod price;
pub mod types;
pub mod validation;

#[cfg(feature = "fixtures")]
pub mod factory;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{DataValidationError, ValidationResult};
pub use price::PriceInput;
pub use types::*;

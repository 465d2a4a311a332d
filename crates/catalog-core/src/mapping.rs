//! # Mapping Form
//!
//! Converts a [`Product`] to and from the flat JSON object exchanged with
//! the web layer.
//!
//! ```text
//! {
//!   "id": 7,                  // null while transient
//!   "name": "Fedora",
//!   "description": "A red hat",
//!   "price": 12.50,           // exact JSON number
//!   "available": true,
//!   "category": "CLOTHS"      // symbolic name
//! }
//! ```
//!
//! Deserialization is atomic: keys are validated into a staged copy and
//! the target is only overwritten once every key has passed.

use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Number, Value};

use crate::error::{DataValidationError, ValidationResult};
use crate::price::normalize_price;
use crate::types::Product;
use crate::validation::{
    expect_bool, expect_category, expect_id, expect_price, expect_string, json_type_name,
};

/// The fixed attribute set of the mapping form.
pub const ATTRIBUTES: [&str; 6] = ["id", "name", "description", "price", "available", "category"];

impl Product {
    /// Returns the mapping form of this product.
    pub fn serialize(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("id".to_string(), self.id.map_or(Value::Null, Value::from));
        map.insert("name".to_string(), Value::String(self.name.clone()));
        map.insert(
            "description".to_string(),
            Value::String(self.description.clone()),
        );
        map.insert("price".to_string(), price_value(self));
        map.insert("available".to_string(), Value::Bool(self.available));
        map.insert(
            "category".to_string(),
            Value::String(self.category.name().to_string()),
        );
        map
    }

    /// Populates this product from a mapping.
    ///
    /// Keys may be a subset of [`ATTRIBUTES`]; absent keys keep their
    /// current values. On error `self` is left untouched.
    ///
    /// ## Errors
    /// - `BadData` when `data` is not an object
    /// - `UnknownAttribute` for a key outside the attribute set
    /// - `InvalidType` when a field has the wrong JSON type
    /// - `UnknownCategory` for a category name outside the closed set
    pub fn deserialize(&mut self, data: &Value) -> ValidationResult<&mut Self> {
        let object = data.as_object().ok_or_else(|| {
            DataValidationError::bad_data(format!(
                "(expected an object, found {})",
                json_type_name(data)
            ))
        })?;

        let mut staged = self.clone();
        for (key, value) in object {
            match key.as_str() {
                "id" => staged.id = expect_id("id", value)?,
                "name" => staged.name = expect_string("name", value)?,
                "description" => staged.description = expect_string("description", value)?,
                "price" => staged.price = expect_price("price", value)?,
                "available" => staged.available = expect_bool("available", value)?,
                "category" => staged.category = expect_category("category", value)?,
                unknown => {
                    return Err(DataValidationError::UnknownAttribute {
                        key: unknown.to_string(),
                    })
                }
            }
        }

        *self = staged;
        Ok(self)
    }

    /// Parses a raw request body and deserializes it into this product.
    pub fn deserialize_str(&mut self, body: &str) -> ValidationResult<&mut Self> {
        let data: Value = serde_json::from_str(body)
            .map_err(|e| DataValidationError::bad_data(format!("({e})")))?;
        self.deserialize(&data)
    }

    /// Builds a new transient-or-persisted product from a mapping.
    pub fn from_json(data: &Value) -> ValidationResult<Product> {
        let mut product = Product::default();
        product.deserialize(data)?;
        Ok(product)
    }
}

impl<'de> Deserialize<'de> for Product {
    /// Reads the mapping form through [`Product::from_json`].
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let data = Value::deserialize(deserializer)?;
        Product::from_json(&data).map_err(serde::de::Error::custom)
    }
}

/// The price as an exact JSON number.
fn price_value(product: &Product) -> Value {
    let text = product.price.to_string();
    match Number::from_str(&text) {
        Ok(number) => Value::Number(number),
        // Decimal text is always a valid JSON number; keep the digits regardless.
        Err(_) => Value::String(normalize_price(product.price)),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

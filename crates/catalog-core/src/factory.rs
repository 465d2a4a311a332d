//! # Product Factory
//!
//! Randomized, valid products for tests and the `seed` binary.
//!
//! Every product a factory builds gets a price no other product from the
//! same factory has (for the first thousand builds), so a price lookup in
//! a test matches exactly the product it was taken from. Names, categories
//! and availability repeat freely.

use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;
use rust_decimal::Decimal;

use crate::types::{Category, Product};

const NAMES: &[&str] = &[
    "Hat", "Pants", "Shirt", "Apple", "Banana", "Pots", "Towels", "Ford", "Chevy", "Hammer",
    "Wrench",
];

const ADJECTIVES: &[&str] = &[
    "Red", "Sturdy", "Fresh", "Vintage", "Compact", "Deluxe", "Plain", "Bright",
];

/// Builds randomized transient products.
///
/// ## Example
/// ```rust
/// use catalog_core::factory::ProductFactory;
///
/// let mut factory = ProductFactory::new();
/// let batch = factory.build_batch(5);
/// assert_eq!(batch.len(), 5);
/// assert!(batch.iter().all(|p| p.id.is_none()));
/// ```
#[derive(Debug)]
pub struct ProductFactory {
    rng: ThreadRng,
    sequence: u64,
}

impl ProductFactory {
    /// Creates a factory with its own sequence.
    pub fn new() -> Self {
        ProductFactory {
            rng: rand::thread_rng(),
            sequence: 0,
        }
    }

    /// Builds one product.
    pub fn build(&mut self) -> Product {
        let sequence = self.sequence;
        self.sequence += 1;

        let name = NAMES.choose(&mut self.rng).copied().unwrap_or("Hat");
        let adjective = ADJECTIVES.choose(&mut self.rng).copied().unwrap_or("Plain");
        let category = Category::ALL
            .choose(&mut self.rng)
            .copied()
            .unwrap_or_default();

        // tens of dollars are random, the low three cent digits carry the sequence
        let tens_of_dollars: i64 = self.rng.gen_range(0..1000);
        let cents = tens_of_dollars * 1000 + (sequence % 1000) as i64 + 50;
        let price = Decimal::new(cents, 2);

        Product {
            id: None,
            name: name.to_string(),
            description: format!("{adjective} {}", name.to_lowercase()),
            price,
            available: self.rng.gen_bool(0.5),
            category,
        }
    }

    /// Builds `count` products.
    pub fn build_batch(&mut self, count: usize) -> Vec<Product> {
        (0..count).map(|_| self.build()).collect()
    }
}

impl Default for ProductFactory {
    fn default() -> Self {
        ProductFactory::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_prices_unique_within_factory() {
        let mut factory = ProductFactory::new();
        let products = factory.build_batch(500);

        let prices: HashSet<_> = products.iter().map(|p| p.price.normalize()).collect();
        assert_eq!(prices.len(), products.len());
    }

    #[test]
    fn test_sequence_sits_in_low_cent_digits() {
        let mut factory = ProductFactory::new();
        for (sequence, product) in factory.build_batch(20).into_iter().enumerate() {
            let cents = (product.price * Decimal::ONE_HUNDRED).trunc();
            let low = cents % Decimal::from(1000);
            assert_eq!(low, Decimal::from(sequence as i64 + 50));
        }
    }

    #[test]
    fn test_products_are_valid() {
        let mut factory = ProductFactory::new();
        for product in factory.build_batch(50) {
            assert!(product.id.is_none());
            assert!(!product.name.is_empty());
            assert!(product.price.is_sign_positive());
            assert!(product.description.ends_with(&product.name.to_lowercase()));
        }
    }
}

//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - CRUD operations (`create`, `update`, `delete`, `find`, `all`)
//! - Finders by name, availability, category and price
//!
//! ## Price Matching
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How find_by_price Matches                            │
//! │                                                                         │
//! │  Caller passes: Decimal 12.50 | f64 12.5 | "12.50"                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PriceInput::to_decimal()  ──►  12.50 (exact)                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  normalize_price()         ──►  "12.5"                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  WHERE price = '12.5'      ← rows were stored through the same         │
//! │                              normalization on insert/update            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Finder results are materialized eagerly into a `Vec`, so `len()`,
//! `first()` and repeated iteration all work on the same snapshot.

use catalog_core::price::{normalize_price, parse_decimal};
use catalog_core::{Category, DataValidationError, PriceInput, Product};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};

/// A row of the `products` table as stored.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    description: String,
    price: String,
    available: bool,
    category: Category,
}

impl TryFrom<ProductRow> for Product {
    type Error = DbError;

    fn try_from(row: ProductRow) -> DbResult<Self> {
        let price = parse_decimal(&row.price).map_err(|e| DbError::Decode {
            id: row.id,
            column: "price",
            reason: e.to_string(),
        })?;

        Ok(Product {
            id: Some(row.id),
            name: row.name,
            description: row.description,
            price,
            available: row.available,
            category: row.category,
        })
    }
}

fn into_products(rows: Vec<ProductRow>) -> DbResult<Vec<Product>> {
    rows.into_iter().map(Product::try_from).collect()
}

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.products();
///
/// let mut hat = Product::new("Fedora", "A red hat", dec!(12.50), true, Category::Cloths);
/// repo.create(&mut hat).await?;          // hat.id is now Some(..)
///
/// hat.description = "A crimson hat".into();
/// repo.update(&hat).await?;
///
/// let same = repo.find_by_price("12.50").await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Inserts a product and assigns it a fresh id.
    ///
    /// Not idempotent: calling it twice inserts two rows, and an id already
    /// on the product is replaced by the new one.
    pub async fn create(&self, product: &mut Product) -> DbResult<()> {
        debug!(name = %product.name, "Creating product");

        let result = sqlx::query(
            r#"
            INSERT INTO products (name, description, price, available, category)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(normalize_price(product.price))
        .bind(product.available)
        .bind(product.category)
        .execute(&self.pool)
        .await?;

        product.id = Some(result.last_insert_rowid());

        debug!(id = ?product.id, "Product created");
        Ok(())
    }

    /// Writes every field of a persisted product back to its row.
    ///
    /// ## Returns
    /// * `Ok(())` - Update successful
    /// * `Err(DbError::Validation)` - `product.id` is `None`
    /// * `Err(DbError::NotFound)` - No row with that id
    pub async fn update(&self, product: &Product) -> DbResult<()> {
        let id = product.id.ok_or(DataValidationError::MissingId {
            operation: "Update",
        })?;

        debug!(id = %id, "Updating product");

        let result = sqlx::query(
            r#"
            UPDATE products SET
                name = ?2,
                description = ?3,
                price = ?4,
                available = ?5,
                category = ?6
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(normalize_price(product.price))
        .bind(product.available)
        .bind(product.category)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Removes a persisted product.
    ///
    /// Returns `false` if the row was already gone.
    pub async fn delete(&self, product: &Product) -> DbResult<bool> {
        let id = product.id.ok_or(DataValidationError::MissingId {
            operation: "Delete",
        })?;

        debug!(id = %id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Returns every product in insertion order.
    pub async fn all(&self) -> DbResult<Vec<Product>> {
        let rows: Vec<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, name, description, price, available, category
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Listed all products");
        into_products(rows)
    }

    /// Gets a product by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn find(&self, id: i64) -> DbResult<Option<Product>> {
        debug!(id = %id, "Finding product");

        let row: Option<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, name, description, price, available, category
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Product::try_from).transpose()
    }

    /// Returns products whose name equals `name` exactly.
    pub async fn find_by_name(&self, name: &str) -> DbResult<Vec<Product>> {
        debug!(name = %name, "Finding products by name");

        let rows: Vec<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, name, description, price, available, category
            FROM products
            WHERE name = ?1
            ORDER BY id
            "#,
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await?;

        into_products(rows)
    }

    /// Returns products whose availability equals `available`.
    pub async fn find_by_availability(&self, available: bool) -> DbResult<Vec<Product>> {
        debug!(available = %available, "Finding products by availability");

        let rows: Vec<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, name, description, price, available, category
            FROM products
            WHERE available = ?1
            ORDER BY id
            "#,
        )
        .bind(available)
        .fetch_all(&self.pool)
        .await?;

        into_products(rows)
    }

    /// Returns products in `category`.
    pub async fn find_by_category(&self, category: Category) -> DbResult<Vec<Product>> {
        debug!(category = %category, "Finding products by category");

        let rows: Vec<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, name, description, price, available, category
            FROM products
            WHERE category = ?1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        into_products(rows)
    }

    /// Returns products whose price equals `price` exactly.
    ///
    /// `price` may be a `Decimal`, a float, an integer or a string; all
    /// representations of the same value match the same rows.
    ///
    /// ## Errors
    /// `DbError::Validation` if a string price is not a number.
    pub async fn find_by_price(&self, price: impl Into<PriceInput>) -> DbResult<Vec<Product>> {
        let price = price.into().to_decimal()?;
        let normalized = normalize_price(price);

        debug!(price = %normalized, "Finding products by price");

        let rows: Vec<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, name, description, price, available, category
            FROM products
            WHERE price = ?1
            ORDER BY id
            "#,
        )
        .bind(normalized)
        .fetch_all(&self.pool)
        .await?;

        into_products(rows)
    }

    /// Counts all products.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Deletes every product. Ids are not reused afterwards.
    ///
    /// ## Returns
    /// Number of deleted rows.
    pub async fn delete_all(&self) -> DbResult<u64> {
        let result = sqlx::query("DELETE FROM products")
            .execute(&self.pool)
            .await?;

        debug!(deleted = result.rows_affected(), "Deleted all products");
        Ok(result.rows_affected())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use catalog_core::factory::ProductFactory;
    use rust_decimal::prelude::ToPrimitive;
    use rust_decimal_macros::dec;
    use serde_json::json;

    async fn setup() -> ProductRepository {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.products()
    }

    async fn create_batch(repo: &ProductRepository, count: usize) -> Vec<Product> {
        let mut products = ProductFactory::new().build_batch(count);
        for product in products.iter_mut() {
            repo.create(product).await.unwrap();
        }
        products
    }

    #[tokio::test]
    async fn test_add_a_product() {
        let repo = setup().await;
        assert!(repo.all().await.unwrap().is_empty());

        let mut product = ProductFactory::new().build();
        repo.create(&mut product).await.unwrap();
        assert!(product.id.is_some());

        let products = repo.all().await.unwrap();
        assert_eq!(products.len(), 1);

        let found = &products[0];
        assert_eq!(found.name, product.name);
        assert_eq!(found.description, product.description);
        assert_eq!(found.price, product.price);
        assert_eq!(found.available, product.available);
        assert_eq!(found.category, product.category);
    }

    #[tokio::test]
    async fn test_fedora_scenario() {
        let repo = setup().await;

        let mut product = Product::new("Fedora", "A red hat", dec!(12.50), true, Category::Cloths);
        repo.create(&mut product).await.unwrap();
        assert!(product.id.is_some());

        let products = repo.all().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].price, dec!(12.50));
        assert_eq!(products[0], product);
    }

    #[tokio::test]
    async fn test_read_a_product() {
        let repo = setup().await;

        let mut product = ProductFactory::new().build();
        repo.create(&mut product).await.unwrap();

        let found = repo.find(product.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(found, product);
    }

    #[tokio::test]
    async fn test_find_missing_product() {
        let repo = setup().await;
        assert!(repo.find(12345).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_a_product() {
        let repo = setup().await;

        let mut product = ProductFactory::new().build();
        repo.create(&mut product).await.unwrap();
        let original_id = product.id;

        product.description = "testing".to_string();
        repo.update(&product).await.unwrap();
        assert_eq!(product.id, original_id);

        let products = repo.all().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, original_id);
        assert_eq!(products[0].description, "testing");
        assert_eq!(products[0].name, product.name);
    }

    #[tokio::test]
    async fn test_update_with_no_id() {
        let repo = setup().await;

        let product = ProductFactory::new().build();
        let err = repo.update(&product).await.unwrap_err();

        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Update called with empty ID field");
    }

    #[tokio::test]
    async fn test_update_deleted_product() {
        let repo = setup().await;

        let mut product = ProductFactory::new().build();
        repo.create(&mut product).await.unwrap();
        repo.delete(&product).await.unwrap();

        let err = repo.update(&product).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_a_product() {
        let repo = setup().await;

        let mut product = ProductFactory::new().build();
        repo.create(&mut product).await.unwrap();
        assert_eq!(repo.all().await.unwrap().len(), 1);

        assert!(repo.delete(&product).await.unwrap());
        assert_eq!(repo.all().await.unwrap().len(), 0);

        // already gone
        assert!(!repo.delete(&product).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let repo = setup().await;
        let products = create_batch(&repo, 3).await;

        repo.delete(&products[1]).await.unwrap();

        let remaining: Vec<_> = repo
            .all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(remaining, vec![products[0].id, products[2].id]);
    }

    #[tokio::test]
    async fn test_delete_with_no_id() {
        let repo = setup().await;

        let err = repo
            .delete(&ProductFactory::new().build())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Delete called with empty ID field");
    }

    #[tokio::test]
    async fn test_list_all_products() {
        let repo = setup().await;
        assert!(repo.all().await.unwrap().is_empty());

        create_batch(&repo, 5).await;

        assert_eq!(repo.all().await.unwrap().len(), 5);
        assert_eq!(repo.count().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_create_is_not_idempotent() {
        let repo = setup().await;

        let mut product = ProductFactory::new().build();
        repo.create(&mut product).await.unwrap();
        let first_id = product.id;
        repo.create(&mut product).await.unwrap();

        assert_ne!(product.id, first_id);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused() {
        let repo = setup().await;
        let products = create_batch(&repo, 2).await;

        repo.delete_all().await.unwrap();

        let mut product = ProductFactory::new().build();
        repo.create(&mut product).await.unwrap();
        assert!(product.id > products[1].id);
    }

    #[tokio::test]
    async fn test_find_by_name() {
        let repo = setup().await;
        let products = create_batch(&repo, 5).await;

        let name = &products[0].name;
        let count = products.iter().filter(|p| &p.name == name).count();

        let found = repo.find_by_name(name).await.unwrap();
        assert_eq!(found.len(), count);
        for product in &found {
            assert_eq!(&product.name, name);
        }
    }

    #[tokio::test]
    async fn test_find_by_name_no_match() {
        let repo = setup().await;
        create_batch(&repo, 3).await;

        assert!(repo.find_by_name("No Such Thing").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_availability() {
        let repo = setup().await;
        let products = create_batch(&repo, 10).await;

        let available = products[0].available;
        let count = products.iter().filter(|p| p.available == available).count();

        let found = repo.find_by_availability(available).await.unwrap();
        assert_eq!(found.len(), count);
        for product in &found {
            assert_eq!(product.available, available);
        }

        let other = repo.find_by_availability(!available).await.unwrap();
        assert_eq!(found.len() + other.len(), products.len());
    }

    #[tokio::test]
    async fn test_find_by_category() {
        let repo = setup().await;
        let products = create_batch(&repo, 10).await;

        let category = products[0].category;
        let count = products.iter().filter(|p| p.category == category).count();

        let found = repo.find_by_category(category).await.unwrap();
        assert_eq!(found.len(), count);
        for product in &found {
            assert_eq!(product.category, category);
        }
    }

    #[tokio::test]
    async fn test_find_by_price() {
        let repo = setup().await;
        let products = create_batch(&repo, 5).await;
        let target = &products[0];

        // exact Decimal
        let found = repo.find_by_price(target.price).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].price, target.price);

        // string representation
        let found = repo.find_by_price(target.price.to_string()).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].price, target.price);

        // float
        let float = target.price.to_f64().unwrap();
        let found = repo.find_by_price(float).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].price, target.price);

        // non-matching
        let found = repo.find_by_price(dec!(9999.99)).await.unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn test_find_by_price_ignores_scale() {
        let repo = setup().await;

        let mut product = Product::new("Fedora", "A red hat", dec!(12.50), true, Category::Cloths);
        repo.create(&mut product).await.unwrap();

        assert_eq!(repo.find_by_price(dec!(12.5)).await.unwrap().len(), 1);
        assert_eq!(repo.find_by_price("12.500").await.unwrap().len(), 1);
        assert_eq!(repo.find_by_price(12.5_f64).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_find_by_price_invalid_string() {
        let repo = setup().await;

        let err = repo.find_by_price("twelve").await.unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_deserialized_product_round_trips_through_store() {
        let repo = setup().await;

        let mut product = Product::from_json(&json!({
            "name": "Skillet",
            "description": "Cast iron",
            "price": 24.99,
            "available": true,
            "category": "HOUSEWARES"
        }))
        .unwrap();
        repo.create(&mut product).await.unwrap();

        let stored = repo.find(product.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(stored.serialize()["price"], json!(24.99));
        assert_eq!(stored.serialize()["category"], json!("HOUSEWARES"));
    }

    #[tokio::test]
    async fn test_delete_all() {
        let repo = setup().await;
        create_batch(&repo, 4).await;

        assert_eq!(repo.delete_all().await.unwrap(), 4);
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_every_category_round_trips() {
        let repo = setup().await;

        for category in Category::ALL {
            let mut product = Product::new("Widget", "", dec!(1), true, category);
            repo.create(&mut product).await.unwrap();

            let found = repo.find(product.id.unwrap()).await.unwrap().unwrap();
            assert_eq!(found.category, category);

            let by_category = repo.find_by_category(category).await.unwrap();
            assert_eq!(by_category.len(), 1);
        }

        assert_eq!(repo.count().await.unwrap(), Category::ALL.len() as i64);
    }

    #[tokio::test]
    async fn test_unreadable_price_is_a_decode_error() {
        let repo = setup().await;

        let id = sqlx::query("INSERT INTO products (name, price) VALUES ('Hat', 'twelve')")
            .execute(&repo.pool)
            .await
            .unwrap()
            .last_insert_rowid();

        let err = repo.find(id).await.unwrap_err();
        assert!(matches!(
            err,
            DbError::Decode {
                column: "price",
                ..
            }
        ));
        assert!(repo.all().await.is_err());
    }
}

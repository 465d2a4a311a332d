//! # Seed Data Generator
//!
//! Populates the database with randomized products for development.
//!
//! ## Usage
//! ```bash
//! # Generate 100 products (default) at $CATALOG_DB_PATH or the platform default
//! cargo run -p catalog-db --bin seed
//!
//! # Generate custom amount into a specific file, wiping existing rows
//! cargo run -p catalog-db --bin seed -- --count 500 --db ./catalog_dev.db --reset
//! ```

use std::env;
use std::time::Instant;

use catalog_core::factory::ProductFactory;
use catalog_core::Category;
use catalog_db::{Database, DbConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    let mut count: usize = 100;
    let mut db_path: Option<String> = None;
    let mut reset = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse()?;
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--reset" | "-r" => reset = true,
            "--help" | "-h" => {
                println!("Catalog Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 100)");
                println!("  -d, --db <PATH>    Database file path (default: $CATALOG_DB_PATH)");
                println!("  -r, --reset        Delete existing products first");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            other => warn!(argument = %other, "Ignoring unknown argument"),
        }
        i += 1;
    }

    let mut config = DbConfig::from_env()?;
    if let Some(path) = db_path {
        config.database_path = path.into();
    }

    let db = Database::new(config).await?;
    let repo = db.products();

    let existing = repo.count().await?;
    if existing > 0 {
        if reset {
            let deleted = repo.delete_all().await?;
            info!(deleted, "Removed existing products");
        } else {
            warn!(
                existing,
                "Database already has products; skipping seed (use --reset to replace)"
            );
            return Ok(());
        }
    }

    let start = Instant::now();
    let mut factory = ProductFactory::new();
    let mut generated = 0usize;

    for mut product in factory.build_batch(count) {
        if let Err(e) = repo.create(&mut product).await {
            warn!(name = %product.name, error = %e, "Failed to insert product");
            continue;
        }
        generated += 1;
    }

    info!(
        generated,
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Seed complete"
    );

    for category in Category::ALL {
        let products = repo.find_by_category(category).await?;
        info!(category = %category, count = products.len(), "Category summary");
    }

    let available = repo.find_by_availability(true).await?;
    info!(count = available.len(), "Available products");

    db.close().await;
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - Default: INFO, debug for catalog crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,catalog_db=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

//! # Repository Module
//!
//! Database repository implementations for the catalog.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  Web layer handler                                                     │
//! │       │                                                                 │
//! │       │  db.products().find_by_category(Category::Food)                │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── create / update / delete                                          │
//! │  ├── all / find                                                        │
//! │  └── find_by_name / _availability / _category / _price                 │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  The handle is passed in explicitly; there is no global session.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Product CRUD and finders

pub mod product;

//! Infrastructure Database Layer
//!
//! This crate binds the product catalog to PostgreSQL using SQLx.
//!
//! # Architecture
//!
//! The crate follows the repository pattern, providing data access abstractions
//! that hide the database implementation details from the domain layer:
//!
//! - [`pool`]: connection pool configuration, from code or environment
//! - [`schema`]: one-time schema bootstrap via [`init_db`]
//! - [`repositories`]: SQL over raw rows
//! - [`adapters`]: the `ProductPort` implementation the domain talks to
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, init_db, DatabaseConfig, PostgresProductAdapter};
//!
//! let pool = create_pool(DatabaseConfig::from_env()?).await?;
//! init_db(&pool).await?;
//! let port = PostgresProductAdapter::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod schema;
pub mod repositories;
pub mod adapters;

pub use pool::{DatabasePool, DatabaseConfig, create_pool, DEFAULT_DATABASE_URL};
pub use error::DatabaseError;
pub use schema::{init_db, PRODUCTS_SCHEMA};
pub use repositories::ProductRepository;
pub use adapters::PostgresProductAdapter;

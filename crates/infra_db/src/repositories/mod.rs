//! Repository implementations
//!
//! Repositories encapsulate SQL and map database rows to plain row structs.
//! Queries are built at runtime, so the crate compiles without a live database.

pub mod product;

pub use product::{NewProduct, ProductRepository, ProductRow};

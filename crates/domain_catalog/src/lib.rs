//! Product Catalog Domain
//!
//! This crate owns the `Product` entity and everything needed to move it in
//! and out of storage and across process boundaries.
//!
//! # Components
//!
//! - **Entity & enum definitions**: [`Product`] and the closed [`Category`] set
//! - **Transport mapping**: [`Product::serialize`] / [`Product::deserialize`]
//!   with strict validation raising [`DataValidationError`]
//! - **Persistence operations**: `create`, `update`, `delete`, `all`, `find`
//!   and the `find_by_*` family, running against an injected [`ProductPort`]
//!
//! # Product Lifecycle
//!
//! ```text
//! new (id = None) -> create() assigns id -> update()* -> delete()
//! ```
//!
//! # Examples
//!
//! ```rust
//! use domain_catalog::{Category, Product};
//! use rust_decimal_macros::dec;
//!
//! let product = Product::new("Fedora", Some("A red hat".into()), dec!(12.50), true, Category::Cloths);
//! assert_eq!(product.to_string(), "<Product Fedora id=[None]>");
//!
//! let data = product.to_json();
//! assert_eq!(data["price"], "12.50");
//! assert_eq!(data["category"], "CLOTHS");
//!
//! let mut copy = Product::default();
//! copy.deserialize(&data).unwrap();
//! assert_eq!(copy, product);
//! ```

pub mod category;
pub mod product;
pub mod error;
pub mod serialization;
pub mod query;
pub mod ports;
pub mod persistence;

pub use category::Category;
pub use product::{
    price_fits_column, Product, MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH, PRICE_LIMIT, PRICE_SCALE,
};
pub use error::{CatalogError, DataValidationError};
pub use serialization::{parse_price, TRANSPORT_KEYS};
pub use query::{PriceFilter, ProductQuery, ProductSet};
pub use ports::ProductPort;
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockProductPort;

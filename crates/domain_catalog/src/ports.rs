//! Catalog Domain Ports
//!
//! This module defines the port interface the catalog domain needs from its
//! store, so that the PostgreSQL adapter and the in-memory mock can be swapped
//! without touching the persistence operations.
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_catalog::{Product, ProductPort};
//! use std::sync::Arc;
//!
//! // The store binding is constructed once and injected everywhere
//! let port: Arc<dyn ProductPort> = Arc::new(PostgresProductAdapter::new(pool));
//!
//! let mut product = Product::from_json(&payload)?;
//! product.create(port.as_ref()).await?;
//! ```

use async_trait::async_trait;

use core_kernel::{DomainPort, HealthCheckable, PortError, ProductId};

use crate::product::Product;
use crate::query::ProductQuery;

/// The port trait for product storage
///
/// Implementations own row lifetime and id assignment. Callers validate
/// products with [`Product::validate`] before handing them over.
#[async_trait]
pub trait ProductPort: DomainPort + HealthCheckable {
    /// Inserts a new row and returns the id the store assigned
    ///
    /// Any id already present on `product` is ignored.
    async fn insert(&self, product: &Product) -> Result<ProductId, PortError>;

    /// Overwrites every column of the row matching `id`
    ///
    /// # Returns
    ///
    /// `PortError::NotFound` if no such row exists
    async fn update(&self, id: ProductId, product: &Product) -> Result<(), PortError>;

    /// Removes the row matching `id`, returning how many rows went away
    async fn delete(&self, id: ProductId) -> Result<u64, PortError>;

    /// Fetches one product by primary key
    async fn find(&self, id: ProductId) -> Result<Option<Product>, PortError>;

    /// Fetches every product, ordered by id
    async fn list(&self) -> Result<Vec<Product>, PortError>;

    /// Fetches the products matching all filters in `query`, ordered by id
    async fn find_by(&self, query: ProductQuery) -> Result<Vec<Product>, PortError>;

    /// Number of stored products
    async fn count(&self) -> Result<u64, PortError>;

    /// Removes every product, returning how many rows went away
    async fn delete_all(&self) -> Result<u64, PortError>;
}

/// Mock implementation for testing
///
/// This adapter stores products in memory and is useful for unit testing
/// without a database.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
    use std::sync::Arc;
    use chrono::Utc;
    use rust_decimal::{Decimal, RoundingStrategy};
    use tokio::sync::RwLock;

    use core_kernel::{AdapterHealth, HealthCheckResult};

    use crate::product::{MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH, PRICE_LIMIT, PRICE_SCALE};

    /// In-memory mock implementation of ProductPort
    ///
    /// Ids are handed out sequentially starting at 1, like a database
    /// sequence, and are never reused. Rows obey the same column limits as
    /// the `products` table: prices are rounded half away from zero to
    /// [`PRICE_SCALE`] places, and over-long text or out-of-range prices are
    /// refused.
    #[derive(Debug, Default)]
    pub struct MockProductPort {
        products: Arc<RwLock<BTreeMap<ProductId, Product>>>,
        last_id: AtomicI64,
        writes: AtomicUsize,
    }

    impl MockProductPort {
        /// Creates a new mock port
        pub fn new() -> Self {
            Self::default()
        }

        /// Number of mutating calls (insert, update, delete) received so far
        pub fn write_count(&self) -> usize {
            self.writes.load(Ordering::SeqCst)
        }

        fn record_write(&self) {
            self.writes.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// Shapes a product the way the `products` columns would store it
    fn to_row(product: &Product, id: ProductId) -> Result<Product, PortError> {
        if product.name.chars().count() > MAX_NAME_LENGTH {
            return Err(PortError::validation_field("value too long for name column", "name"));
        }
        if product
            .description
            .as_ref()
            .is_some_and(|text| text.chars().count() > MAX_DESCRIPTION_LENGTH)
        {
            return Err(PortError::validation_field(
                "value too long for description column",
                "description",
            ));
        }

        let price = product
            .price
            .round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero);
        if price.abs() >= Decimal::from(PRICE_LIMIT) {
            return Err(PortError::validation_field("numeric field overflow", "price"));
        }

        let mut row = product.clone();
        row.id = Some(id);
        row.price = price;
        Ok(row)
    }

    impl DomainPort for MockProductPort {}

    #[async_trait]
    impl HealthCheckable for MockProductPort {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult {
                adapter_id: "mock-product-port".to_string(),
                status: AdapterHealth::Healthy,
                latency_ms: 0,
                message: Some("Mock adapter always healthy".to_string()),
                checked_at: Utc::now(),
            }
        }
    }

    #[async_trait]
    impl ProductPort for MockProductPort {
        async fn insert(&self, product: &Product) -> Result<ProductId, PortError> {
            self.record_write();
            let mut products = self.products.write().await;
            let id = ProductId::new(self.last_id.load(Ordering::SeqCst) + 1);
            let row = to_row(product, id)?;

            self.last_id.store(id.value(), Ordering::SeqCst);
            products.insert(id, row);
            Ok(id)
        }

        async fn update(&self, id: ProductId, product: &Product) -> Result<(), PortError> {
            self.record_write();
            let mut products = self.products.write().await;
            let stored = products
                .get_mut(&id)
                .ok_or_else(|| PortError::not_found("Product", id))?;

            *stored = to_row(product, id)?;
            Ok(())
        }

        async fn delete(&self, id: ProductId) -> Result<u64, PortError> {
            self.record_write();
            Ok(self.products.write().await.remove(&id).map_or(0, |_| 1))
        }

        async fn find(&self, id: ProductId) -> Result<Option<Product>, PortError> {
            Ok(self.products.read().await.get(&id).cloned())
        }

        async fn list(&self) -> Result<Vec<Product>, PortError> {
            Ok(self.products.read().await.values().cloned().collect())
        }

        async fn find_by(&self, query: ProductQuery) -> Result<Vec<Product>, PortError> {
            Ok(self
                .products
                .read()
                .await
                .values()
                .filter(|product| query.matches(product))
                .cloned()
                .collect())
        }

        async fn count(&self) -> Result<u64, PortError> {
            Ok(self.products.read().await.len() as u64)
        }

        async fn delete_all(&self) -> Result<u64, PortError> {
            self.record_write();
            let mut products = self.products.write().await;
            let removed = products.len() as u64;
            products.clear();
            Ok(removed)
        }
    }

}

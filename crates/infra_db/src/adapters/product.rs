//! PostgreSQL Product Adapter
//!
//! This module provides the internal (database) adapter for the catalog
//! domain, implementing the `ProductPort` trait using PostgreSQL via the
//! `ProductRepository`.
//!
//! # Overview
//!
//! The `PostgresProductAdapter` serves as the bridge between the domain layer's
//! port interface and the database layer. It:
//!
//! - Translates domain requests into repository operations
//! - Converts database rows back to domain products
//! - Handles error translation between database and port errors
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{init_db, PostgresProductAdapter};
//! use domain_catalog::{Product, ProductPort};
//! use std::sync::Arc;
//!
//! init_db(&pool).await?;
//! let port: Arc<dyn ProductPort> = Arc::new(PostgresProductAdapter::new(pool));
//! let everything = Product::all(port.as_ref()).await?;
//! ```

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{
    ProductId, PortError, DomainPort,
    HealthCheckable, HealthCheckResult, AdapterHealth,
};
use domain_catalog::{Category, Product, ProductPort, ProductQuery};

use crate::error::DatabaseError;
use crate::repositories::product::{NewProduct, ProductRepository, ProductRow};

const ADAPTER_ID: &str = "postgres-product-adapter";

/// PostgreSQL-backed implementation of the ProductPort trait
///
/// # Error Handling
///
/// Database errors are translated to `PortError` variants:
/// - `DatabaseError::NotFound` -> `PortError::NotFound`
/// - `DatabaseError::DuplicateEntry` -> `PortError::Conflict`
/// - Undecodable rows -> `PortError::Transformation`
/// - Other errors -> `PortError::Internal`
#[derive(Debug, Clone)]
pub struct PostgresProductAdapter {
    repository: ProductRepository,
    pool: PgPool,
}

impl PostgresProductAdapter {
    /// Creates a new PostgreSQL product adapter
    ///
    /// # Arguments
    ///
    /// * `pool` - The PostgreSQL connection pool
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ProductRepository::new(pool.clone()),
            pool,
        }
    }
}

/// Builds the column values for an insert or update
fn to_new_product(product: &Product) -> NewProduct<'_> {
    NewProduct {
        name: &product.name,
        description: product.description.as_deref(),
        price: product.price,
        available: product.available,
        category: product.category.name(),
    }
}

/// Converts a stored row back into a domain product
fn row_to_product(row: ProductRow) -> Result<Product, PortError> {
    let category = Category::from_name(&row.category).ok_or_else(|| {
        PortError::transformation(format!(
            "product {} has unknown category '{}'",
            row.id, row.category
        ))
    })?;

    Ok(Product {
        id: Some(ProductId::new(row.id)),
        name: row.name,
        description: row.description,
        price: row.price,
        available: row.available,
        category,
    })
}

fn rows_to_products(rows: Vec<ProductRow>) -> Result<Vec<Product>, PortError> {
    rows.into_iter().map(row_to_product).collect()
}

fn port_error(error: DatabaseError) -> PortError {
    PortError::from(error)
}

impl DomainPort for PostgresProductAdapter {}

#[async_trait]
impl HealthCheckable for PostgresProductAdapter {
    /// Checks database connectivity
    ///
    /// Performs a simple SELECT 1 query to verify the connection pool
    /// is operational and the database is responsive.
    async fn health_check(&self) -> HealthCheckResult {
        let start = std::time::Instant::now();

        let result = sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await;

        let latency_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(_) => HealthCheckResult {
                adapter_id: ADAPTER_ID.to_string(),
                status: AdapterHealth::Healthy,
                latency_ms,
                message: None,
                checked_at: Utc::now(),
            },
            Err(e) => HealthCheckResult {
                adapter_id: ADAPTER_ID.to_string(),
                status: AdapterHealth::Unhealthy,
                latency_ms,
                message: Some(format!("Database error: {}", e)),
                checked_at: Utc::now(),
            },
        }
    }
}

#[async_trait]
impl ProductPort for PostgresProductAdapter {
    #[instrument(skip(self, product), fields(name = %product.name))]
    async fn insert(&self, product: &Product) -> Result<ProductId, PortError> {
        let row = self
            .repository
            .insert(&to_new_product(product))
            .await
            .map_err(port_error)?;

        debug!(id = row.id, "Product inserted");
        Ok(ProductId::new(row.id))
    }

    #[instrument(skip(self, product), fields(product_id = %id))]
    async fn update(&self, id: ProductId, product: &Product) -> Result<(), PortError> {
        self.repository
            .update(id.value(), &to_new_product(product))
            .await
            .map_err(port_error)?;

        debug!("Product updated");
        Ok(())
    }

    #[instrument(skip(self), fields(product_id = %id))]
    async fn delete(&self, id: ProductId) -> Result<u64, PortError> {
        self.repository.delete(id.value()).await.map_err(port_error)
    }

    #[instrument(skip(self), fields(product_id = %id))]
    async fn find(&self, id: ProductId) -> Result<Option<Product>, PortError> {
        self.repository
            .get_by_id(id.value())
            .await
            .map_err(port_error)?
            .map(row_to_product)
            .transpose()
    }

    async fn list(&self) -> Result<Vec<Product>, PortError> {
        let rows = self.repository.list_all().await.map_err(port_error)?;
        rows_to_products(rows)
    }

    #[instrument(skip(self))]
    async fn find_by(&self, query: ProductQuery) -> Result<Vec<Product>, PortError> {
        let rows = self.repository.find_by(&query).await.map_err(port_error)?;
        rows_to_products(rows)
    }

    async fn count(&self) -> Result<u64, PortError> {
        let count = self.repository.count().await.map_err(port_error)?;
        Ok(count.max(0) as u64)
    }

    async fn delete_all(&self) -> Result<u64, PortError> {
        self.repository.delete_all().await.map_err(port_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn row(category: &str) -> ProductRow {
        ProductRow {
            id: 12,
            name: "Fedora".to_string(),
            description: Some("A red hat".to_string()),
            price: dec!(12.50),
            available: true,
            category: category.to_string(),
        }
    }

    #[test]
    fn test_row_to_product() {
        let product = row_to_product(row("CLOTHS")).unwrap();

        assert_eq!(product.id, Some(ProductId::new(12)));
        assert_eq!(product.category, Category::Cloths);
        assert_eq!(product.price, dec!(12.50));
    }

    #[test]
    fn test_unknown_stored_category_is_transformation_error() {
        let error = row_to_product(row("HATS")).unwrap_err();
        assert!(matches!(error, PortError::Transformation { .. }));
    }

    #[test]
    fn test_new_product_columns() {
        let product = Product::new("Apple", None, dec!(0.75), false, Category::Food);
        let columns = to_new_product(&product);

        assert_eq!(columns.name, "Apple");
        assert_eq!(columns.description, None);
        assert_eq!(columns.category, "FOOD");
        assert!(!columns.available);
    }
}

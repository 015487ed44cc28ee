//! Product persistence operations
//!
//! Instance operations (`create`, `update`, `delete`) sync a detached
//! `Product` with its row; collection operations (`all`, `find`,
//! `find_by_*`) read the whole catalog. Every operation receives the store
//! binding explicitly as a [`ProductPort`].
//!
//! Each operation makes at most one port call, and all validation happens
//! before it. Port errors are returned as-is inside [`CatalogError::Port`].
//!
//! # Example
//!
//! ```rust,ignore
//! let mut product = Product::new("Fedora", None, dec!(12.50), true, Category::Cloths);
//! product.create(&port).await?;
//!
//! product.description = Some("A red hat".into());
//! product.update(&port).await?;
//!
//! let cloths = Product::find_by_category(&port, Some(Category::Cloths)).await?;
//! assert_eq!(cloths.count(), 1);
//! ```

use tracing::info;

use core_kernel::ProductId;

use crate::category::Category;
use crate::error::{CatalogError, DataValidationError};
use crate::ports::ProductPort;
use crate::product::Product;
use crate::query::{PriceFilter, ProductQuery, ProductSet};

impl Product {
    /// Inserts this product as a new row and records the assigned id
    ///
    /// # Errors
    ///
    /// A `DataValidationError` from [`Product::validate`] if the store could
    /// not hold the fields exactly; the store is not contacted in that case.
    pub async fn create<P: ProductPort + ?Sized>(&mut self, port: &P) -> Result<(), CatalogError> {
        info!(name = %self.name, "Creating product");
        self.validate()?;
        let id = port.insert(self).await?;
        self.id = Some(id);
        Ok(())
    }

    /// Writes the current field values over the existing row
    ///
    /// # Errors
    ///
    /// `DataValidationError::MissingId` if the product was never created, or
    /// the error from [`Product::validate`]; the store is not contacted in
    /// either case.
    pub async fn update<P: ProductPort + ?Sized>(&self, port: &P) -> Result<(), CatalogError> {
        info!(name = %self.name, "Saving product");
        let id = self.id.ok_or(DataValidationError::MissingId)?;
        self.validate()?;
        port.update(id, self).await?;
        Ok(())
    }

    /// Removes this product's row
    ///
    /// Deleting a product that is already gone, or was never created, is a
    /// no-op.
    pub async fn delete<P: ProductPort + ?Sized>(&self, port: &P) -> Result<(), CatalogError> {
        info!(name = %self.name, "Deleting product");
        if let Some(id) = self.id {
            port.delete(id).await?;
        }
        Ok(())
    }

    /// Returns every stored product
    pub async fn all<P: ProductPort + ?Sized>(port: &P) -> Result<Vec<Product>, CatalogError> {
        info!("Processing all products");
        Ok(port.list().await?)
    }

    /// Finds a product by its id
    pub async fn find<P: ProductPort + ?Sized>(
        port: &P,
        id: ProductId,
    ) -> Result<Option<Product>, CatalogError> {
        info!(%id, "Processing lookup for id");
        Ok(port.find(id).await?)
    }

    /// Finds products with exactly this name
    pub async fn find_by_name<P: ProductPort + ?Sized>(
        port: &P,
        name: &str,
    ) -> Result<ProductSet, CatalogError> {
        info!(%name, "Processing name query");
        Self::find_matching(port, ProductQuery::by_name(name)).await
    }

    /// Finds products by availability, `true` when not given
    pub async fn find_by_availability<P: ProductPort + ?Sized>(
        port: &P,
        available: Option<bool>,
    ) -> Result<ProductSet, CatalogError> {
        let available = available.unwrap_or(true);
        info!(%available, "Processing available query");
        Self::find_matching(port, ProductQuery::by_availability(available)).await
    }

    /// Finds products in a category, `Category::Unknown` when not given
    pub async fn find_by_category<P: ProductPort + ?Sized>(
        port: &P,
        category: Option<Category>,
    ) -> Result<ProductSet, CatalogError> {
        let category = category.unwrap_or_default();
        info!(%category, "Processing category query");
        Self::find_matching(port, ProductQuery::by_category(category)).await
    }

    /// Finds products at exactly this price
    ///
    /// Accepts a `Decimal` or its text form; text is normalized with
    /// [`crate::parse_price`] so stringified transport prices match.
    pub async fn find_by_price<P: ProductPort + ?Sized>(
        port: &P,
        price: impl Into<PriceFilter>,
    ) -> Result<ProductSet, CatalogError> {
        let filter: PriceFilter = price.into();
        let price = filter.resolve()?;
        info!(%price, "Processing price query");
        Self::find_matching(port, ProductQuery::by_price(price)).await
    }

    /// Finds products matching an arbitrary combination of filters
    pub async fn find_matching<P: ProductPort + ?Sized>(
        port: &P,
        query: ProductQuery,
    ) -> Result<ProductSet, CatalogError> {
        Ok(ProductSet::new(port.find_by(query).await?))
    }

    /// Number of stored products
    pub async fn count<P: ProductPort + ?Sized>(port: &P) -> Result<u64, CatalogError> {
        Ok(port.count().await?)
    }

    /// Removes every stored product
    pub async fn delete_all<P: ProductPort + ?Sized>(port: &P) -> Result<u64, CatalogError> {
        info!("Deleting all products");
        Ok(port.delete_all().await?)
    }
}

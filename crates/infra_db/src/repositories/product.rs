//! Product repository implementation
//!
//! This module provides database access for the `products` table. It works in
//! terms of raw rows; translating rows to and from domain products is the job
//! of [`crate::adapters::PostgresProductAdapter`].

use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use tracing::{debug, instrument};

use domain_catalog::ProductQuery;

use crate::error::DatabaseError;

/// Repository for managing product rows
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    /// Creates a new ProductRepository with the given connection pool
    ///
    /// # Arguments
    ///
    /// * `pool` - The PostgreSQL connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a product, letting the sequence assign its id
    ///
    /// # Returns
    ///
    /// The stored row, including the new id
    #[instrument(skip(self, product), fields(name = %product.name))]
    pub async fn insert(&self, product: &NewProduct<'_>) -> Result<ProductRow, DatabaseError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            INSERT INTO products (name, description, price, available, category)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, description, price, available, category
            "#,
        )
        .bind(product.name)
        .bind(product.description)
        .bind(product.price)
        .bind(product.available)
        .bind(product.category)
        .fetch_one(&self.pool)
        .await?;

        debug!(id = row.id, "Inserted product row");
        Ok(row)
    }

    /// Overwrites every column of an existing row
    ///
    /// # Errors
    ///
    /// `DatabaseError::NotFound` if no row has this id
    #[instrument(skip(self, product))]
    pub async fn update(&self, id: i64, product: &NewProduct<'_>) -> Result<ProductRow, DatabaseError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            UPDATE products
            SET name = $2, description = $3, price = $4, available = $5, category = $6
            WHERE id = $1
            RETURNING id, name, description, price, available, category
            "#,
        )
        .bind(id)
        .bind(product.name)
        .bind(product.description)
        .bind(product.price)
        .bind(product.available)
        .bind(product.category)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Product", id))?;

        Ok(row)
    }

    /// Deletes a row by id
    ///
    /// # Returns
    ///
    /// The number of rows removed (0 or 1)
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<u64, DatabaseError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Retrieves a row by primary key
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<Option<ProductRow>, DatabaseError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, price, available, category
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Retrieves every row, ordered by id
    pub async fn list_all(&self) -> Result<Vec<ProductRow>, DatabaseError> {
        self.find_by(&ProductQuery::default()).await
    }

    /// Retrieves the rows matching every filter set on `query`
    ///
    /// Price is compared as `NUMERIC`, so `12.5` matches a stored `12.50`.
    #[instrument(skip(self))]
    pub async fn find_by(&self, query: &ProductQuery) -> Result<Vec<ProductRow>, DatabaseError> {
        let mut builder = QueryBuilder::<Postgres>::new(
            "SELECT id, name, description, price, available, category FROM products",
        );
        push_filters(&mut builder, query);
        builder.push(" ORDER BY id");

        let rows = builder
            .build_query_as::<ProductRow>()
            .fetch_all(&self.pool)
            .await?;

        debug!(matched = rows.len(), "Product query complete");
        Ok(rows)
    }

    /// Counts all rows
    pub async fn count(&self) -> Result<i64, DatabaseError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Deletes every row
    #[instrument(skip(self))]
    pub async fn delete_all(&self) -> Result<u64, DatabaseError> {
        let result = sqlx::query("DELETE FROM products")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, query: &ProductQuery) {
    let mut separator = " WHERE ";

    if let Some(ref name) = query.name {
        builder.push(separator).push("name = ").push_bind(name.clone());
        separator = " AND ";
    }
    if let Some(available) = query.available {
        builder.push(separator).push("available = ").push_bind(available);
        separator = " AND ";
    }
    if let Some(category) = query.category {
        builder.push(separator).push("category = ").push_bind(category.name());
        separator = " AND ";
    }
    if let Some(price) = query.price {
        builder.push(separator).push("price = ").push_bind(price);
    }
}

/// Database row for a product
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ProductRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub available: bool,
    pub category: String,
}

/// Column values for an insert or full update
#[derive(Debug, Clone, Copy)]
pub struct NewProduct<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub price: Decimal,
    pub available: bool,
    pub category: &'a str,
}

//! Schema bootstrap
//!
//! `init_db` binds the catalog to a freshly configured database by creating
//! the `products` table when it does not exist yet. It is idempotent and safe
//! to call on every start-up; it never alters an existing table.

use sqlx::PgPool;
use tracing::info;

use crate::error::DatabaseError;

/// DDL for the products table
///
/// Column limits match the checks in `domain_catalog::Product::validate`:
/// `price` is `NUMERIC(14, 2)`, so the domain refuses prices with more than
/// two decimal places or a magnitude of 10^12 and above before they reach
/// the insert. The category check mirrors `domain_catalog::Category`.
pub const PRODUCTS_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id          BIGSERIAL PRIMARY KEY,
    name        VARCHAR(100) NOT NULL CHECK (length(btrim(name)) > 0),
    description VARCHAR(250),
    price       NUMERIC(14, 2) NOT NULL,
    available   BOOLEAN NOT NULL DEFAULT TRUE,
    category    VARCHAR(20) NOT NULL DEFAULT 'UNKNOWN'
                CHECK (category IN ('UNKNOWN', 'CLOTHS', 'FOOD', 'HOUSEWARES', 'AUTOMOTIVE', 'TOOLS'))
);

CREATE INDEX IF NOT EXISTS products_name_idx ON products (name);
CREATE INDEX IF NOT EXISTS products_category_idx ON products (category);
"#;

/// Creates the catalog schema if it is missing
///
/// # Errors
///
/// `DatabaseError::SchemaFailed` if the DDL cannot be applied
pub async fn init_db(pool: &PgPool) -> Result<(), DatabaseError> {
    info!("Initializing catalog schema");

    sqlx::raw_sql(PRODUCTS_SCHEMA)
        .execute(pool)
        .await
        .map_err(|e| DatabaseError::SchemaFailed(e.to_string()))?;

    info!("Catalog schema ready");
    Ok(())
}

//! Product entity
//!
//! A `Product` is a detached, mutable view of one row in the `products`
//! table. It is synchronised with the store only through the explicit
//! persistence operations in [`crate::persistence`].

use std::fmt;

use rust_decimal::Decimal;

use core_kernel::ProductId;

use crate::category::Category;
use crate::error::DataValidationError;

/// Fractional digits kept by the `products.price` column
pub const PRICE_SCALE: u32 = 2;

/// Prices must stay strictly below this magnitude to fit `NUMERIC(14, 2)`
pub const PRICE_LIMIT: i64 = 1_000_000_000_000;

/// Longest name the `products.name` column holds, in characters
pub const MAX_NAME_LENGTH: usize = 100;

/// Longest description the `products.description` column holds, in characters
pub const MAX_DESCRIPTION_LENGTH: usize = 250;

/// Returns true when the store can hold `price` without rounding or overflow
///
/// Trailing zeros do not count against the scale, so `12.500` fits.
pub fn price_fits_column(price: Decimal) -> bool {
    price.normalize().scale() <= PRICE_SCALE && price.abs() < Decimal::from(PRICE_LIMIT)
}

pub(crate) fn check_price(price: Decimal, raw: &str) -> Result<Decimal, DataValidationError> {
    if price_fits_column(price) {
        Ok(price)
    } else {
        Err(DataValidationError::InvalidPrice(raw.to_string()))
    }
}

pub(crate) fn check_name(name: &str) -> Result<(), DataValidationError> {
    if name.trim().is_empty() {
        return Err(DataValidationError::invalid("name", "must not be empty"));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(DataValidationError::invalid(
            "name",
            format!("longer than {} characters", MAX_NAME_LENGTH),
        ));
    }
    Ok(())
}

pub(crate) fn check_description(description: Option<&str>) -> Result<(), DataValidationError> {
    match description {
        Some(text) if text.chars().count() > MAX_DESCRIPTION_LENGTH => {
            Err(DataValidationError::invalid(
                "description",
                format!("longer than {} characters", MAX_DESCRIPTION_LENGTH),
            ))
        }
        _ => Ok(()),
    }
}

/// A catalog product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Store-assigned key; `None` until the product is first created
    pub id: Option<ProductId>,
    /// Display name
    pub name: String,
    /// Free-form description
    pub description: Option<String>,
    /// Unit price, exact to the cent
    pub price: Decimal,
    /// Whether the product can currently be ordered
    pub available: bool,
    /// Catalog category
    pub category: Category,
}

impl Product {
    /// Creates an unpersisted product
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        price: Decimal,
        available: bool,
        category: Category,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            description,
            price,
            available,
            category,
        }
    }

    /// Checks the field limits the store enforces
    ///
    /// # Errors
    ///
    /// `InvalidAttribute` for a blank or over-long name or an over-long
    /// description, `InvalidPrice` for a price the store would round or reject.
    pub fn validate(&self) -> Result<(), DataValidationError> {
        check_name(&self.name)?;
        check_description(self.description.as_deref())?;
        check_price(self.price, &self.price.to_string())?;
        Ok(())
    }
}

impl Default for Product {
    fn default() -> Self {
        Self::new(String::new(), None, Decimal::ZERO, true, Category::Unknown)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "<Product {} id=[{}]>", self.name, id),
            None => write!(f, "<Product {} id=[None]>", self.name),
        }
    }
}

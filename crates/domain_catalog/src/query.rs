//! Product queries and result sets

use rust_decimal::Decimal;

use crate::category::Category;
use crate::error::DataValidationError;
use crate::product::{check_price, Product};
use crate::serialization::parse_price;

/// Attribute filters for finding products
///
/// Unset filters match everything; set filters are combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    /// Exact name match
    pub name: Option<String>,
    /// Availability flag
    pub available: Option<bool>,
    /// Category member
    pub category: Option<Category>,
    /// Exact price, compared by decimal value
    pub price: Option<Decimal>,
}

impl ProductQuery {
    /// Creates a query to find by name
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Creates a query to find by availability
    pub fn by_availability(available: bool) -> Self {
        Self {
            available: Some(available),
            ..Default::default()
        }
    }

    /// Creates a query to find by category
    pub fn by_category(category: Category) -> Self {
        Self {
            category: Some(category),
            ..Default::default()
        }
    }

    /// Creates a query to find by price
    pub fn by_price(price: Decimal) -> Self {
        Self {
            price: Some(price),
            ..Default::default()
        }
    }

    /// Evaluates the filters against an in-memory product
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(ref name) = self.name {
            if &product.name != name {
                return false;
            }
        }
        if let Some(available) = self.available {
            if product.available != available {
                return false;
            }
        }
        if let Some(category) = self.category {
            if product.category != category {
                return false;
            }
        }
        if let Some(price) = self.price {
            if product.price != price {
                return false;
            }
        }
        true
    }
}

/// A price given either as an exact amount or as transport text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceFilter {
    Amount(Decimal),
    Text(String),
}

impl PriceFilter {
    /// Resolves the filter to an exact amount
    ///
    /// Amounts the store could never hold are rejected with `InvalidPrice`
    /// instead of silently matching nothing.
    pub fn resolve(&self) -> Result<Decimal, DataValidationError> {
        match self {
            PriceFilter::Amount(amount) => check_price(*amount, &amount.to_string()),
            PriceFilter::Text(text) => parse_price(text),
        }
    }
}

impl From<Decimal> for PriceFilter {
    fn from(amount: Decimal) -> Self {
        PriceFilter::Amount(amount)
    }
}

impl From<&str> for PriceFilter {
    fn from(text: &str) -> Self {
        PriceFilter::Text(text.to_string())
    }
}

impl From<String> for PriceFilter {
    fn from(text: String) -> Self {
        PriceFilter::Text(text)
    }
}

/// The products matched by a query
///
/// Results are materialized, so the set can be counted and iterated any
/// number of times in any order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductSet {
    products: Vec<Product>,
}

impl ProductSet {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Number of matching products
    pub fn count(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn first(&self) -> Option<&Product> {
        self.products.first()
    }

    pub fn into_vec(self) -> Vec<Product> {
        self.products
    }
}

impl From<Vec<Product>> for ProductSet {
    fn from(products: Vec<Product>) -> Self {
        Self::new(products)
    }
}

impl FromIterator<Product> for ProductSet {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for ProductSet {
    type Item = Product;
    type IntoIter = std::vec::IntoIter<Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.into_iter()
    }
}

impl<'a> IntoIterator for &'a ProductSet {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

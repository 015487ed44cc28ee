//! Product Factory
//!
//! Generates random but valid products for tests that need volume rather
//! than specific values. Names come from a short fixed list so that name
//! lookups regularly find more than one match.

use fake::faker::lorem::en::Sentence;
use fake::{Fake, Faker};
use rust_decimal::Decimal;

use domain_catalog::{CatalogError, Category, Product, ProductPort};

/// Names the factory picks from
pub const PRODUCT_NAMES: [&str; 11] = [
    "Hat", "Pants", "Shirt", "Apple", "Banana", "Pots", "Towels", "Ford", "Chevy", "Hammer",
    "Wrench",
];

/// Factory for random, unpersisted products
pub struct ProductFactory;

impl ProductFactory {
    /// Builds one random product with no id
    ///
    /// Prices are whole cents between 0.50 and 2000.00.
    pub fn build() -> Product {
        let name = PRODUCT_NAMES[(0..PRODUCT_NAMES.len()).fake::<usize>()];
        let description: String = Sentence(3..8).fake();
        let cents: i64 = (50i64..200_001i64).fake();
        let available: bool = Faker.fake();
        let category = Category::ALL[(0..Category::ALL.len()).fake::<usize>()];

        Product::new(
            name,
            Some(description),
            Decimal::new(cents, 2),
            available,
            category,
        )
    }

    /// Builds `count` random products
    pub fn build_batch(count: usize) -> Vec<Product> {
        (0..count).map(|_| Self::build()).collect()
    }

    /// Builds one random product and creates it through `port`
    pub async fn create<P: ProductPort + ?Sized>(port: &P) -> Result<Product, CatalogError> {
        let mut product = Self::build();
        product.create(port).await?;
        Ok(product)
    }

    /// Builds and creates `count` random products, returned in creation order
    pub async fn create_batch<P: ProductPort + ?Sized>(
        port: &P,
        count: usize,
    ) -> Result<Vec<Product>, CatalogError> {
        let mut products = Self::build_batch(count);
        for product in products.iter_mut() {
            product.create(port).await?;
        }
        Ok(products)
    }
}

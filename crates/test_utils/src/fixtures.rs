//! Pre-built Test Fixtures
//!
//! Provides ready-to-use products and transport payloads. These fixtures are
//! fixed and predictable, unlike the output of [`crate::ProductFactory`].

use rust_decimal_macros::dec;
use serde_json::{json, Value};

use domain_catalog::{Category, Product};

/// Fixture for product test data
pub struct ProductFixtures;

impl ProductFixtures {
    /// The canonical red hat
    pub fn fedora() -> Product {
        Product::new(
            "Fedora",
            Some("A red hat".to_string()),
            dec!(12.50),
            true,
            Category::Cloths,
        )
    }

    /// An unavailable tool
    pub fn hammer() -> Product {
        Product::new(
            "Hammer",
            Some("Claw hammer, 16oz".to_string()),
            dec!(24.99),
            false,
            Category::Tools,
        )
    }

    /// A product without a description
    pub fn apple() -> Product {
        Product::new("Apple", None, dec!(0.75), true, Category::Food)
    }

    /// A product in the default category
    pub fn mystery_box() -> Product {
        Product::new("Mystery Box", None, dec!(5.00), true, Category::Unknown)
    }
}

/// Fixture for transport payloads
pub struct PayloadFixtures;

impl PayloadFixtures {
    /// A complete, valid payload
    pub fn valid() -> Value {
        json!({
            "id": null,
            "name": "Fedora",
            "description": "A red hat",
            "price": "12.50",
            "available": true,
            "category": "CLOTHS",
        })
    }

    /// The valid payload with one key replaced
    pub fn with(key: &str, value: Value) -> Value {
        let mut payload = Self::valid();
        payload[key] = value;
        payload
    }

    /// The valid payload with one key removed
    pub fn without(key: &str) -> Value {
        let mut payload = Self::valid();
        if let Some(fields) = payload.as_object_mut() {
            fields.remove(key);
        }
        payload
    }
}

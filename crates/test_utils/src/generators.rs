//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random catalog data that
//! maintains domain invariants.

use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::ProductId;
use domain_catalog::{Category, Product};

use crate::factory::PRODUCT_NAMES;

/// Strategy for generating Category members
pub fn category_strategy() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::Unknown),
        Just(Category::Cloths),
        Just(Category::Food),
        Just(Category::Housewares),
        Just(Category::Automotive),
        Just(Category::Tools),
    ]
}

/// Strategy for generating prices in whole cents (0.01 to 99,999.99)
pub fn price_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for generating product names
pub fn product_name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::sample::select(PRODUCT_NAMES.to_vec()).prop_map(str::to_string),
        "[A-Z][a-z]{2,12}( [A-Z][a-z]{2,8})?",
    ]
}

/// Strategy for generating optional descriptions
pub fn description_strategy() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[A-Za-z0-9 ,.'\"-]{0,60}")
}

/// Strategy for generating unpersisted products
pub fn product_strategy() -> impl Strategy<Value = Product> {
    (
        product_name_strategy(),
        description_strategy(),
        price_strategy(),
        any::<bool>(),
        category_strategy(),
    )
        .prop_map(|(name, description, price, available, category)| {
            Product::new(name, description, price, available, category)
        })
}

/// Strategy for generating products that carry a store id
pub fn persisted_product_strategy() -> impl Strategy<Value = Product> {
    (product_strategy(), 1i64..1_000_000i64).prop_map(|(mut product, id)| {
        product.id = Some(ProductId::new(id));
        product
    })
}

//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for catalog types that give more
//! meaningful error messages than standard assertions.

use domain_catalog::{CatalogError, Category, DataValidationError, Product, ProductSet};

/// Asserts that two products agree on every field except `id`
///
/// # Panics
///
/// Panics naming the first field that differs
pub fn assert_same_fields(actual: &Product, expected: &Product) {
    assert_eq!(actual.name, expected.name, "name mismatch for {}", expected);
    assert_eq!(
        actual.description, expected.description,
        "description mismatch for {}",
        expected
    );
    assert_eq!(actual.price, expected.price, "price mismatch for {}", expected);
    assert_eq!(
        actual.available, expected.available,
        "available mismatch for {}",
        expected
    );
    assert_eq!(
        actual.category, expected.category,
        "category mismatch for {}",
        expected
    );
}

/// Asserts that every product in the set belongs to `category`
pub fn assert_all_in_category(products: &ProductSet, category: Category) {
    for product in products {
        assert_eq!(
            product.category, category,
            "{} is in {} but expected only {}",
            product, product.category, category
        );
    }
}

/// Asserts that a result failed validation on the given attribute
///
/// # Panics
///
/// Panics if the result is `Ok`, or failed for another reason
pub fn assert_validation_error<T: std::fmt::Debug>(
    result: Result<T, DataValidationError>,
    attribute: &str,
) -> DataValidationError {
    match result {
        Ok(value) => panic!("Expected validation error on [{}], got Ok({:?})", attribute, value),
        Err(error) => {
            assert!(
                error.to_string().contains(attribute),
                "Validation error '{}' does not name [{}]",
                error,
                attribute
            );
            error
        }
    }
}

/// Asserts that a catalog operation failed validation rather than in the store
pub fn assert_catalog_validation_error<T: std::fmt::Debug>(
    result: Result<T, CatalogError>,
) -> DataValidationError {
    match result {
        Ok(value) => panic!("Expected validation error, got Ok({:?})", value),
        Err(CatalogError::Validation(error)) => error,
        Err(CatalogError::Port(error)) => panic!("Expected validation error, got port error: {}", error),
    }
}

//! Product model tests
//!
//! Exercises the full product lifecycle and every finder against the
//! in-memory port. The same scenarios run against PostgreSQL in
//! `infra_db/tests`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::ProductId;
use domain_catalog::{
    Category, DataValidationError, MockProductPort, Product, MAX_NAME_LENGTH, PRICE_LIMIT,
};
use test_utils::{
    assert_all_in_category, assert_catalog_validation_error, assert_same_fields, ProductFactory,
    ProductFixtures,
};

async fn empty_store() -> MockProductPort {
    let port = MockProductPort::new();
    assert_eq!(Product::delete_all(&port).await.unwrap(), 0);
    port
}

// ============================================================================
// Lifecycle
// ============================================================================

mod lifecycle_tests {
    use super::*;

    #[test]
    fn test_create_a_product() {
        let product = Product::new(
            "Fedora",
            Some("A red hat".to_string()),
            dec!(12.50),
            true,
            Category::Cloths,
        );

        assert_eq!(product.to_string(), "<Product Fedora id=[None]>");
        assert_eq!(product.id, None);
        assert_eq!(product.name, "Fedora");
        assert_eq!(product.description.as_deref(), Some("A red hat"));
        assert!(product.available);
        assert_eq!(product.price, dec!(12.5));
        assert_eq!(product.category, Category::Cloths);
    }

    #[tokio::test]
    async fn test_add_a_product() {
        let port = empty_store().await;
        assert!(Product::all(&port).await.unwrap().is_empty());

        let mut product = ProductFactory::build();
        product.create(&port).await.unwrap();

        assert!(product.id.is_some());
        let products = Product::all(&port).await.unwrap();
        assert_eq!(products.len(), 1);
        assert_same_fields(&products[0], &product);
    }

    #[tokio::test]
    async fn test_create_ignores_existing_id() {
        let port = empty_store().await;
        let mut product = ProductFixtures::fedora();
        product.id = Some(ProductId::new(500));

        product.create(&port).await.unwrap();

        assert_eq!(product.id, Some(ProductId::new(1)));
        assert!(Product::find(&port, ProductId::new(500)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_read_a_product() {
        let port = empty_store().await;
        let mut product = ProductFactory::build();
        product.create(&port).await.unwrap();

        let fetched = Product::find(&port, product.id.unwrap())
            .await
            .unwrap()
            .expect("product should be stored");

        assert_eq!(fetched, product);
        assert_eq!(fetched.to_string(), format!("<Product {} id=[{}]>", product.name, product.id.unwrap()));
    }

    #[tokio::test]
    async fn test_find_missing_id_returns_none() {
        let port = empty_store().await;
        assert!(Product::find(&port, ProductId::new(42)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_a_product() {
        let port = empty_store().await;
        let mut product = ProductFactory::build();
        product.create(&port).await.unwrap();
        let original_id = product.id;

        product.description = Some("This is a new description".to_string());
        product.update(&port).await.unwrap();

        assert_eq!(product.id, original_id);
        let products = Product::all(&port).await.unwrap();
        assert_eq!(products.len(), 1);
        let fetched = Product::find(&port, product.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(fetched.description.as_deref(), Some("This is a new description"));
    }

    #[tokio::test]
    async fn test_update_a_product_without_id() {
        let port = empty_store().await;
        let mut product = ProductFactory::create(&port).await.unwrap();
        let writes_before = port.write_count();

        product.id = None;
        let error = assert_catalog_validation_error(product.update(&port).await);

        assert_eq!(error, DataValidationError::MissingId);
        assert_eq!(error.to_string(), "Update called with empty ID field");
        assert_eq!(port.write_count(), writes_before);
    }

    #[tokio::test]
    async fn test_update_leaves_other_rows_alone() {
        let port = empty_store().await;
        let products = ProductFactory::create_batch(&port, 3).await.unwrap();

        let mut changed = products[1].clone();
        changed.name = "Renamed".to_string();
        changed.update(&port).await.unwrap();

        for untouched in [&products[0], &products[2]] {
            let stored = Product::find(&port, untouched.id.unwrap()).await.unwrap().unwrap();
            assert_eq!(&stored, untouched);
        }
    }

    #[tokio::test]
    async fn test_delete_a_product() {
        let port = empty_store().await;
        let mut product = ProductFactory::build();
        product.create(&port).await.unwrap();
        assert_eq!(Product::all(&port).await.unwrap().len(), 1);

        product.delete(&port).await.unwrap();
        assert!(Product::all(&port).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_twice_removes_exactly_one() {
        let port = empty_store().await;
        let products = ProductFactory::create_batch(&port, 4).await.unwrap();
        let victim = &products[0];

        victim.delete(&port).await.unwrap();
        victim.delete(&port).await.unwrap();

        assert_eq!(Product::count(&port).await.unwrap(), 3);
        assert!(Product::find(&port, victim.id.unwrap()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_all_products() {
        let port = empty_store().await;
        assert!(Product::all(&port).await.unwrap().is_empty());

        ProductFactory::create_batch(&port, 5).await.unwrap();

        assert_eq!(Product::all(&port).await.unwrap().len(), 5);
    }
}

// ============================================================================
// Store limits
// ============================================================================

mod store_limit_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_rejects_price_with_three_decimal_places() {
        let port = empty_store().await;
        let mut product = Product::new("Hat", None, dec!(12.345), true, Category::Cloths);
        let writes_before = port.write_count();

        let error = assert_catalog_validation_error(product.create(&port).await);

        assert_eq!(error, DataValidationError::InvalidPrice("12.345".to_string()));
        assert_eq!(product.id, None);
        assert_eq!(port.write_count(), writes_before);
        assert_eq!(Product::count(&port).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_rejects_price_beyond_column_range() {
        let port = empty_store().await;
        let mut product = ProductFixtures::fedora();
        product.price = Decimal::from(PRICE_LIMIT);

        let error = assert_catalog_validation_error(product.create(&port).await);

        assert!(matches!(error, DataValidationError::InvalidPrice(_)));
        assert_eq!(Product::count(&port).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_rejects_price_the_store_would_round() {
        let port = empty_store().await;
        let mut product = ProductFactory::create(&port).await.unwrap();
        let stored = product.clone();
        let writes_before = port.write_count();

        product.price = dec!(19.999);
        let error = assert_catalog_validation_error(product.update(&port).await);

        assert_eq!(error.attribute(), Some("price"));
        assert_eq!(port.write_count(), writes_before);
        let fetched = Product::find(&port, stored.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(fetched, stored);
    }

    #[tokio::test]
    async fn test_largest_price_round_trips_exactly() {
        let port = empty_store().await;
        let mut product = ProductFixtures::fedora();
        product.price = dec!(999999999999.99);
        product.create(&port).await.unwrap();

        let fetched = Product::find(&port, product.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(fetched, product);

        let serialized = product.serialize()["price"].as_str().unwrap().to_string();
        let found = Product::find_by_price(&port, serialized).await.unwrap();
        assert_eq!(found.count(), 1);
    }

    #[tokio::test]
    async fn test_create_rejects_over_long_name() {
        let port = empty_store().await;
        let mut product = ProductFixtures::apple();
        product.name = "A".repeat(MAX_NAME_LENGTH + 1);

        let error = assert_catalog_validation_error(product.create(&port).await);

        assert_eq!(error.attribute(), Some("name"));
        assert_eq!(Product::count(&port).await.unwrap(), 0);
    }
}

// ============================================================================
// Finders
// ============================================================================

mod finder_tests {
    use super::*;

    #[tokio::test]
    async fn test_find_product_by_name() {
        let port = empty_store().await;
        let products = ProductFactory::create_batch(&port, 5).await.unwrap();

        let name = products[3].name.clone();
        let expected = products.iter().filter(|p| p.name == name).count();

        let found = Product::find_by_name(&port, &name).await.unwrap();
        assert_eq!(found.count(), expected);
        for product in &found {
            assert_eq!(product.name, name);
        }
        // counting again after iterating sees the same result
        assert_eq!(found.count(), expected);
    }

    #[tokio::test]
    async fn test_find_product_by_availability() {
        let port = empty_store().await;
        let products = ProductFactory::create_batch(&port, 10).await.unwrap();

        let available = products[6].available;
        let expected = products.iter().filter(|p| p.available == available).count();

        let found = Product::find_by_availability(&port, Some(available)).await.unwrap();
        assert_eq!(found.count(), expected);
        assert!(found.iter().all(|p| p.available == available));
    }

    #[tokio::test]
    async fn test_find_by_availability_defaults_to_true() {
        let port = empty_store().await;
        ProductFixtures::fedora().create(&port).await.unwrap();
        ProductFixtures::hammer().create(&port).await.unwrap();

        let found = Product::find_by_availability(&port, None).await.unwrap();
        assert_eq!(found.count(), 1);
        assert_eq!(found.first().unwrap().name, "Fedora");
    }

    #[tokio::test]
    async fn test_find_product_by_category() {
        let port = empty_store().await;
        let products = ProductFactory::create_batch(&port, 10).await.unwrap();

        let category = products[4].category;
        let expected = products.iter().filter(|p| p.category == category).count();

        let found = Product::find_by_category(&port, Some(category)).await.unwrap();
        assert_eq!(found.count(), expected);
        assert_all_in_category(&found, category);
    }

    #[tokio::test]
    async fn test_find_by_category_defaults_to_unknown() {
        let port = empty_store().await;
        ProductFixtures::mystery_box().create(&port).await.unwrap();
        ProductFixtures::apple().create(&port).await.unwrap();

        let found = Product::find_by_category(&port, None).await.unwrap();
        assert_eq!(found.count(), 1);
        assert_all_in_category(&found, Category::Unknown);

        let names: Vec<String> = found.into_vec().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Mystery Box".to_string()]);
    }

    #[tokio::test]
    async fn test_defaulted_finders_on_empty_store_are_empty() {
        let port = empty_store().await;

        assert!(Product::find_by_category(&port, None).await.unwrap().is_empty());
        assert!(Product::find_by_availability(&port, None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_product_by_price() {
        let port = empty_store().await;
        let products = ProductFactory::create_batch(&port, 10).await.unwrap();

        let price = products[8].price;
        let expected = products.iter().filter(|p| p.price == price).count();

        let found = Product::find_by_price(&port, price.to_string()).await.unwrap();
        assert_eq!(found.count(), expected);
        assert!(found.iter().all(|p| p.price == price));
    }

    #[tokio::test]
    async fn test_find_by_price_accepts_decorated_text() {
        let port = empty_store().await;
        let mut fedora = ProductFixtures::fedora();
        fedora.create(&port).await.unwrap();
        ProductFixtures::hammer().create(&port).await.unwrap();

        for text in ["12.50", " 12.50 ", "\"12.50\"", " \"12.5\" "] {
            let found = Product::find_by_price(&port, text).await.unwrap();
            assert_eq!(found.count(), 1, "price filter {:?}", text);
            assert_eq!(found.first().unwrap().id, fedora.id);
        }

        let found = Product::find_by_price(&port, dec!(12.50)).await.unwrap();
        assert_eq!(found.count(), 1);
    }

    #[tokio::test]
    async fn test_find_by_price_rejects_unparseable_text() {
        let port = empty_store().await;
        let error = assert_catalog_validation_error(Product::find_by_price(&port, "12,50").await);
        assert_eq!(error, DataValidationError::InvalidPrice("12,50".to_string()));

        let error = assert_catalog_validation_error(Product::find_by_price(&port, "12.345").await);
        assert_eq!(error, DataValidationError::InvalidPrice("12.345".to_string()));
    }
}

// ============================================================================
// Scenario
// ============================================================================

mod scenario_tests {
    use super::*;

    #[tokio::test]
    async fn test_category_partition_over_generated_products() {
        let port = empty_store().await;
        let products = ProductFactory::create_batch(&port, 10).await.unwrap();

        let mut total = 0;
        for category in Category::ALL {
            let expected = products.iter().filter(|p| p.category == category).count();
            let found = Product::find_by_category(&port, Some(category)).await.unwrap();

            assert_eq!(found.count(), expected, "count for {}", category);
            assert_all_in_category(&found, category);
            total += found.count();
        }
        assert_eq!(total, products.len());
    }
}

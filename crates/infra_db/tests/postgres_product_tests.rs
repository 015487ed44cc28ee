//! PostgreSQL integration tests for the product adapter
//!
//! Each test starts its own PostgreSQL container, so these are ignored by
//! default. Run them with `cargo test -p infra_db -- --ignored`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{HealthCheckable, ProductId};
use domain_catalog::{Category, DataValidationError, Product, ProductPort, PRICE_LIMIT};
use test_utils::{
    assert_catalog_validation_error, assert_same_fields, db_test, ProductFactory, ProductFixtures,
};

db_test!(test_init_db_is_idempotent, |db, port| {
    infra_db::init_db(db.pool()).await.unwrap();
    infra_db::init_db(db.pool()).await.unwrap();
    assert_eq!(Product::count(&port).await.unwrap(), 0);
});

db_test!(test_health_check_reports_healthy, |db, port| {
    let health = port.health_check().await;
    assert!(health.is_operational());
    drop(db);
});

db_test!(test_create_assigns_id_and_round_trips, |db, port| {
    let mut product = ProductFixtures::fedora();
    product.create(&port).await.unwrap();

    let id = product.id.expect("id assigned");
    let fetched = Product::find(&port, id).await.unwrap().expect("stored");
    assert_eq!(fetched, product);
    drop(db);
});

db_test!(test_price_keeps_exact_decimal, |db, port| {
    let mut product = ProductFixtures::fedora();
    product.price = dec!(1999.99);
    product.create(&port).await.unwrap();

    let fetched = Product::find(&port, product.id.unwrap()).await.unwrap().unwrap();
    assert_eq!(fetched.price, dec!(1999.99));
    assert_eq!(fetched.price.to_string(), "1999.99");
    drop(db);
});

db_test!(test_price_with_three_decimal_places_never_reaches_store, |db, port| {
    let mut product = Product::new("Hat", None, dec!(12.345), true, Category::Cloths);

    let error = assert_catalog_validation_error(product.create(&port).await);
    assert_eq!(error, DataValidationError::InvalidPrice("12.345".to_string()));
    assert_eq!(Product::count(&port).await.unwrap(), 0);
    drop(db);
});

db_test!(test_price_beyond_column_range_never_reaches_store, |db, port| {
    let payload = test_utils::PayloadFixtures::with("price", serde_json::json!("1e13"));
    assert!(Product::from_json(&payload).is_err());

    let mut product = ProductFixtures::fedora();
    product.price = Decimal::from(PRICE_LIMIT);
    let error = assert_catalog_validation_error(product.create(&port).await);
    assert!(matches!(error, DataValidationError::InvalidPrice(_)));
    assert_eq!(Product::count(&port).await.unwrap(), 0);
    drop(db);
});

db_test!(test_largest_price_is_stored_and_found_exactly, |db, port| {
    let mut product = ProductFixtures::hammer();
    product.price = dec!(999999999999.99);
    product.create(&port).await.unwrap();

    let fetched = Product::find(&port, product.id.unwrap()).await.unwrap().unwrap();
    assert_eq!(fetched, product);

    let serialized = product.serialize()["price"].as_str().unwrap().to_string();
    let found = Product::find_by_price(&port, serialized).await.unwrap();
    assert_eq!(found.count(), 1);
    drop(db);
});

db_test!(test_store_rounds_like_the_in_memory_port, |db, port| {
    let product = Product::new("Hat", None, dec!(12.345), true, Category::Cloths);

    let id = port.insert(&product).await.unwrap();
    let stored = Product::find(&port, id).await.unwrap().unwrap();
    assert_eq!(stored.price, dec!(12.35));
    drop(db);
});

db_test!(test_update_overwrites_row, |db, port| {
    let mut product = ProductFactory::create(&port).await.unwrap();
    let original_id = product.id;

    product.description = Some("This is a new description".to_string());
    product.category = Category::Housewares;
    product.update(&port).await.unwrap();

    assert_eq!(product.id, original_id);
    let all = Product::all(&port).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_same_fields(&all[0], &product);
    drop(db);
});

db_test!(test_update_of_missing_row_is_not_found, |db, port| {
    let mut product = ProductFixtures::hammer();
    product.id = Some(ProductId::new(9_999));

    let error = product.update(&port).await.unwrap_err();
    assert!(!error.is_validation());
    drop(db);
});

db_test!(test_delete_removes_exactly_one, |db, port| {
    let products = ProductFactory::create_batch(&port, 5).await.unwrap();

    products[2].delete(&port).await.unwrap();
    products[2].delete(&port).await.unwrap();

    assert_eq!(Product::all(&port).await.unwrap().len(), 4);
    assert!(Product::find(&port, products[2].id.unwrap()).await.unwrap().is_none());
    drop(db);
});

db_test!(test_find_by_price_normalizes_text, |db, port| {
    let mut product = ProductFixtures::fedora();
    product.create(&port).await.unwrap();
    ProductFixtures::hammer().create(&port).await.unwrap();

    for text in ["12.50", " 12.50 ", "\"12.50\"", "12.5"] {
        let found = Product::find_by_price(&port, text).await.unwrap();
        assert_eq!(found.count(), 1, "price filter {:?}", text);
        assert_eq!(found.first().unwrap().id, product.id);
    }
    drop(db);
});

db_test!(test_find_by_category_matches_generated_subset, |db, port| {
    let products = ProductFactory::create_batch(&port, 10).await.unwrap();

    for category in Category::ALL {
        let expected = products.iter().filter(|p| p.category == category).count();
        let found = Product::find_by_category(&port, Some(category)).await.unwrap();

        assert_eq!(found.count(), expected);
        assert!(found.iter().all(|p| p.category == category));
    }
    drop(db);
});

db_test!(test_clear_data_restarts_ids, |db, port| {
    ProductFactory::create_batch(&port, 3).await.unwrap();
    db.clear_data().await.unwrap();

    let product = ProductFactory::create(&port).await.unwrap();
    assert_eq!(product.id, Some(ProductId::new(1)));
});

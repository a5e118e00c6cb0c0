//! Document-store semantics for the customers collection.
//!
//! These tests require a `PostgreSQL` database reachable through
//! `MOWTRACK_DATABASE_URL` (or `DATABASE_URL`); migrations are applied
//! automatically by the shared `test_pool` helper.

use mowtrack_admin::db::CustomerRepository;
use mowtrack_admin::models::CustomerPatch;
use mowtrack_integration_tests::{sample_customer, test_pool};

#[tokio::test]
#[ignore = "Requires PostgreSQL"]
async fn create_then_get_round_trips() {
    let pool = test_pool().await;
    let repo = CustomerRepository::new(&pool);

    let fields = sample_customer();
    let id = repo.create(&fields).await.expect("create customer");

    let customer = repo
        .get(id)
        .await
        .expect("get customer")
        .expect("customer exists");

    assert_eq!(customer.id, id);
    assert_eq!(customer.fields.first_name, fields.first_name);
    assert_eq!(customer.fields.email, fields.email);
    assert_eq!(customer.fields.address.city, fields.address.city);
    assert_eq!(
        customer.fields.mower_details.serial_number,
        fields.mower_details.serial_number
    );
    // A fresh record has never been updated
    assert_eq!(customer.created_at, customer.updated_at);

    repo.delete(id).await.expect("cleanup");
}

#[tokio::test]
#[ignore = "Requires PostgreSQL"]
async fn partial_update_leaves_other_fields_alone() {
    let pool = test_pool().await;
    let repo = CustomerRepository::new(&pool);

    let fields = sample_customer();
    let id = repo.create(&fields).await.expect("create customer");
    let before = repo.get(id).await.expect("get").expect("exists");

    let patch = CustomerPatch {
        phone: Some("555-9999".to_string()),
        ..CustomerPatch::default()
    };
    repo.update(id, &patch).await.expect("update customer");

    let after = repo.get(id).await.expect("get").expect("exists");
    assert_eq!(after.fields.phone, "555-9999");
    assert_eq!(after.fields.first_name, before.fields.first_name);
    assert_eq!(after.fields.last_name, before.fields.last_name);
    assert_eq!(after.fields.email, before.fields.email);
    assert_eq!(after.created_at, before.created_at);
    assert!(after.updated_at > before.updated_at);

    repo.delete(id).await.expect("cleanup");
}

#[tokio::test]
#[ignore = "Requires PostgreSQL"]
async fn update_of_missing_customer_is_not_found() {
    let pool = test_pool().await;
    let repo = CustomerRepository::new(&pool);

    let patch = CustomerPatch {
        phone: Some("555-0000".to_string()),
        ..CustomerPatch::default()
    };
    let err = repo
        .update(uuid::Uuid::new_v4().into(), &patch)
        .await
        .expect_err("update of missing id must fail");

    assert!(matches!(
        err,
        mowtrack_admin::db::RepositoryError::NotFound
    ));
}

#[tokio::test]
#[ignore = "Requires PostgreSQL"]
async fn delete_is_silent_for_missing_customer() {
    let pool = test_pool().await;
    let repo = CustomerRepository::new(&pool);

    // Deleting a record that never existed is not an error
    repo.delete(uuid::Uuid::new_v4().into())
        .await
        .expect("delete of missing id succeeds");
}

#[tokio::test]
#[ignore = "Requires PostgreSQL"]
async fn deleted_customer_is_gone() {
    let pool = test_pool().await;
    let repo = CustomerRepository::new(&pool);

    let id = repo.create(&sample_customer()).await.expect("create");
    repo.delete(id).await.expect("delete");

    assert!(repo.get(id).await.expect("get").is_none());
}

#[tokio::test]
#[ignore = "Requires PostgreSQL"]
async fn back_to_back_updates_are_last_write_wins() {
    let pool = test_pool().await;
    let repo = CustomerRepository::new(&pool);

    let id = repo.create(&sample_customer()).await.expect("create");

    let first = CustomerPatch {
        phone: Some("555-1111".to_string()),
        ..CustomerPatch::default()
    };
    let second = CustomerPatch {
        phone: Some("555-2222".to_string()),
        ..CustomerPatch::default()
    };
    repo.update(id, &first).await.expect("first update");
    repo.update(id, &second).await.expect("second update");

    let customer = repo.get(id).await.expect("get").expect("exists");
    assert_eq!(customer.fields.phone, "555-2222");

    repo.delete(id).await.expect("cleanup");
}

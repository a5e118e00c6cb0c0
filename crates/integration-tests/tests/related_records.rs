//! Service history and notes: per-customer filtering, ordering, and the
//! deliberate absence of cascade deletes.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use mowtrack_admin::db::{CustomerRepository, NoteRepository, ServiceHistoryRepository};
use mowtrack_admin::models::{NotePatch, ServiceHistoryPatch};
use mowtrack_core::{Cost, ServiceStatus};
use mowtrack_integration_tests::{sample_customer, sample_note, sample_service, test_pool};

fn date(s: &str) -> NaiveDate {
    s.parse().expect("valid test date")
}

#[tokio::test]
#[ignore = "Requires PostgreSQL"]
async fn service_history_is_filtered_and_newest_first() {
    let pool = test_pool().await;
    let customers = CustomerRepository::new(&pool);
    let services = ServiceHistoryRepository::new(&pool);

    let customer_id = customers.create(&sample_customer()).await.expect("create");
    let other_id = customers.create(&sample_customer()).await.expect("create");

    services
        .create(&sample_service(customer_id, date("2026-03-14")))
        .await
        .expect("create entry");
    services
        .create(&sample_service(customer_id, date("2026-07-02")))
        .await
        .expect("create entry");
    services
        .create(&sample_service(other_id, date("2026-05-01")))
        .await
        .expect("create entry for other customer");

    let history = services.for_customer(customer_id).await.expect("list");
    assert_eq!(history.len(), 2);
    assert!(history.iter().all(|e| e.fields.customer_id == customer_id));
    assert_eq!(history[0].fields.date, date("2026-07-02"));
    assert_eq!(history[1].fields.date, date("2026-03-14"));

    // An entry added later but dated earlier still lands last
    services
        .create(&sample_service(customer_id, date("2025-11-20")))
        .await
        .expect("create backdated entry");
    let history = services.for_customer(customer_id).await.expect("list");
    assert_eq!(history.len(), 3);
    assert_eq!(history[2].fields.date, date("2025-11-20"));

    for entry in &history {
        services.delete(entry.id).await.expect("cleanup");
    }
    customers.delete(customer_id).await.expect("cleanup");
    customers.delete(other_id).await.expect("cleanup");
}

#[tokio::test]
#[ignore = "Requires PostgreSQL"]
async fn notes_are_newest_first() {
    let pool = test_pool().await;
    let customers = CustomerRepository::new(&pool);
    let notes = NoteRepository::new(&pool);

    let customer_id = customers.create(&sample_customer()).await.expect("create");

    notes
        .create(&sample_note(customer_id, "first note"))
        .await
        .expect("create note");
    notes
        .create(&sample_note(customer_id, "second note"))
        .await
        .expect("create note");

    let listed = notes.for_customer(customer_id).await.expect("list");
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].fields.content, "second note");
    assert_eq!(listed[1].fields.content, "first note");
    assert!(listed[0].created_at >= listed[1].created_at);

    for note in &listed {
        notes.delete(note.id).await.expect("cleanup");
    }
    customers.delete(customer_id).await.expect("cleanup");
}

#[tokio::test]
#[ignore = "Requires PostgreSQL"]
async fn deleting_customer_leaves_related_records_behind() {
    let pool = test_pool().await;
    let customers = CustomerRepository::new(&pool);
    let services = ServiceHistoryRepository::new(&pool);
    let notes = NoteRepository::new(&pool);

    let customer_id = customers.create(&sample_customer()).await.expect("create");
    let service_id = services
        .create(&sample_service(customer_id, date("2026-01-15")))
        .await
        .expect("create entry");
    let note_id = notes
        .create(&sample_note(customer_id, "mind the gate latch"))
        .await
        .expect("create note");

    customers.delete(customer_id).await.expect("delete customer");

    // No cascade: the orphaned records are still retrievable
    let history = services.for_customer(customer_id).await.expect("list");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, service_id);

    let listed = notes.for_customer(customer_id).await.expect("list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, note_id);

    services.delete(service_id).await.expect("cleanup");
    notes.delete(note_id).await.expect("cleanup");
}

#[tokio::test]
#[ignore = "Requires PostgreSQL"]
async fn service_entry_updates_merge() {
    let pool = test_pool().await;
    let customers = CustomerRepository::new(&pool);
    let services = ServiceHistoryRepository::new(&pool);

    let customer_id = customers.create(&sample_customer()).await.expect("create");
    let id = services
        .create(&sample_service(customer_id, date("2026-04-10")))
        .await
        .expect("create entry");

    let patch = ServiceHistoryPatch {
        status: Some(ServiceStatus::Completed),
        cost: Some(Cost::new(Decimal::new(8999, 2)).expect("valid cost")),
        ..ServiceHistoryPatch::default()
    };
    services.update(id, &patch).await.expect("update entry");

    let history = services.for_customer(customer_id).await.expect("list");
    let entry = history.iter().find(|e| e.id == id).expect("entry exists");
    assert_eq!(entry.fields.status, ServiceStatus::Completed);
    assert_eq!(entry.fields.cost.display_dollars(), "$89.99");
    // Untouched fields survive the merge
    assert_eq!(entry.fields.technician, "Sam");

    services.delete(id).await.expect("cleanup");
    customers.delete(customer_id).await.expect("cleanup");
}

#[tokio::test]
#[ignore = "Requires PostgreSQL"]
async fn note_updates_refresh_updated_at() {
    let pool = test_pool().await;
    let customers = CustomerRepository::new(&pool);
    let notes = NoteRepository::new(&pool);

    let customer_id = customers.create(&sample_customer()).await.expect("create");
    let id = notes
        .create(&sample_note(customer_id, "original text"))
        .await
        .expect("create note");

    let before = notes.for_customer(customer_id).await.expect("list");
    let before = before.iter().find(|n| n.id == id).expect("note exists");
    let before_updated = before.updated_at;

    let patch = NotePatch {
        content: Some("revised text".to_string()),
        ..NotePatch::default()
    };
    notes.update(id, &patch).await.expect("update note");

    let after = notes.for_customer(customer_id).await.expect("list");
    let after = after.iter().find(|n| n.id == id).expect("note exists");
    assert_eq!(after.fields.content, "revised text");
    assert_eq!(after.fields.author, "admin@example.com");
    assert!(after.updated_at > before_updated);

    notes.delete(id).await.expect("cleanup");
    customers.delete(customer_id).await.expect("cleanup");
}

//! Database operations for the admin panel.
//!
//! # Collections
//!
//! Three document collections, each a table of `(id, doc, timestamps)` rows:
//!
//! - `customers` - Customer records
//! - `service_history` - Per-customer service visits
//! - `notes` - Per-customer free-text notes
//!
//! Documents are schemaless JSONB on the wire; the repositories here are the
//! single seam through which persistence flows, and every document read is
//! validated into its typed shape before it crosses into application code.
//! A stored document that no longer matches the expected shape surfaces as
//! [`RepositoryError::DataCorruption`] instead of passing through silently.
//!
//! # Migrations
//!
//! Migrations live in `crates/admin/migrations/` and are embedded via
//! `sqlx::migrate!`; the binary runs them on startup.

use std::time::Duration;

use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub mod customers;
pub mod notes;
pub mod service_history;

pub use customers::CustomerRepository;
pub use notes::NoteRepository;
pub use service_history::ServiceHistoryRepository;

/// SQLSTATE for insufficient privilege, raised when the store rejects an
/// operation the connected role is not allowed to perform.
const SQLSTATE_INSUFFICIENT_PRIVILEGE: &str = "42501";

/// Errors from the repository layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Transport or database failure from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The store rejected the operation for lack of privileges.
    #[error("permission denied by store")]
    PermissionDenied,

    /// A stored document does not match its expected shape.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// A write referenced an identifier that does not exist. Reads never
    /// produce this; a missing document reads as `None`.
    #[error("not found")]
    NotFound,
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Classify an sqlx error, separating permission rejections from transport
/// and other database failures.
pub(crate) fn classify(e: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = e
        && db_err.code().as_deref() == Some(SQLSTATE_INSUFFICIENT_PRIVILEGE)
    {
        return RepositoryError::PermissionDenied;
    }
    RepositoryError::Database(e)
}

/// Serialize a document body for storage.
pub(crate) fn to_doc<T: Serialize>(fields: &T) -> Result<serde_json::Value, RepositoryError> {
    serde_json::to_value(fields)
        .map_err(|e| RepositoryError::DataCorruption(format!("failed to encode document: {e}")))
}

/// Validate a stored document against its typed shape.
pub(crate) fn from_doc<T: DeserializeOwned>(
    collection: &str,
    doc: serde_json::Value,
) -> Result<T, RepositoryError> {
    serde_json::from_value(doc).map_err(|e| {
        RepositoryError::DataCorruption(format!(
            "{collection} document does not match expected shape: {e}"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CustomerFields;

    #[test]
    fn from_doc_rejects_missing_required_fields() {
        let doc = serde_json::json!({
            "first_name": "Jane",
            "last_name": "Doe"
        });
        let err = from_doc::<CustomerFields>("customers", doc).unwrap_err();
        match err {
            RepositoryError::DataCorruption(msg) => {
                assert!(msg.contains("customers"), "message names the collection: {msg}");
            }
            other => panic!("expected DataCorruption, got {other:?}"),
        }
    }

    #[test]
    fn from_doc_accepts_a_well_formed_document() {
        let doc = serde_json::json!({
            "first_name": "Jane",
            "last_name": "Doe",
            "email": "jd@x.com",
            "phone": "555-1111",
            "address": {
                "street": "1 Main St",
                "city": "Springfield",
                "state": "IL",
                "zip_code": "62701"
            },
            "mower_details": {
                "brand": "Toro",
                "model": "Recycler 22"
            }
        });
        let fields = from_doc::<CustomerFields>("customers", doc).expect("valid document");
        assert_eq!(fields.full_name(), "Jane Doe");
        assert!(fields.mower_details.serial_number.is_none());
    }
}

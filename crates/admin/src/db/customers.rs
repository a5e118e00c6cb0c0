//! Customer repository.

use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use mowtrack_core::CustomerId;

use super::{RepositoryError, classify, from_doc, to_doc};
use crate::models::{Customer, CustomerFields, CustomerPatch};

/// Collection backing customer records.
const COLLECTION: &str = "customers";

/// Repository for customer documents.
pub struct CustomerRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CustomerRepository<'a> {
    /// Create a new customer repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Write a new customer document. The store assigns the identifier and
    /// stamps `created_at = updated_at = now()`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` on transport failure or if the store
    /// rejects the write.
    pub async fn create(&self, fields: &CustomerFields) -> Result<CustomerId, RepositoryError> {
        let doc = to_doc(fields)?;
        let row = sqlx::query("INSERT INTO customers (doc) VALUES ($1) RETURNING id")
            .bind(doc)
            .fetch_one(self.pool)
            .await
            .map_err(classify)?;
        let id: Uuid = row.try_get("id")?;
        Ok(CustomerId::new(id))
    }

    /// Merge a partial update into an existing document and refresh
    /// `updated_at`. `created_at` is never touched.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no document has this
    /// identifier, or `RepositoryError` on transport/permission failure.
    pub async fn update(
        &self,
        id: CustomerId,
        patch: &CustomerPatch,
    ) -> Result<(), RepositoryError> {
        let patch_doc = to_doc(patch)?;
        let result =
            sqlx::query("UPDATE customers SET doc = doc || $2, updated_at = now() WHERE id = $1")
                .bind(id.as_uuid())
                .bind(patch_doc)
                .execute(self.pool)
                .await
                .map_err(classify)?;
        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    /// Remove a customer document. Deleting an already-absent document is
    /// not an error, and related service history and notes are left behind
    /// (no cascade).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` on transport/permission failure.
    pub async fn delete(&self, id: CustomerId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id.as_uuid())
            .execute(self.pool)
            .await
            .map_err(classify)?;
        Ok(())
    }

    /// Read one customer, or `None` if the identifier is absent.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DataCorruption` if the stored document
    /// does not match the customer shape, or `RepositoryError` on
    /// transport failure. "Not found" is not an error.
    pub async fn get(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError> {
        let row =
            sqlx::query("SELECT id, doc, created_at, updated_at FROM customers WHERE id = $1")
                .bind(id.as_uuid())
                .fetch_optional(self.pool)
                .await
                .map_err(classify)?;
        row.map(hydrate).transpose()
    }

    /// Read every customer document, in store-defined order. The caller
    /// filters and sorts in memory; suitable only for small record counts.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` on transport failure or if any stored
    /// document fails shape validation.
    pub async fn list(&self) -> Result<Vec<Customer>, RepositoryError> {
        let rows = sqlx::query("SELECT id, doc, created_at, updated_at FROM customers")
            .fetch_all(self.pool)
            .await
            .map_err(classify)?;
        rows.into_iter().map(hydrate).collect()
    }
}

/// Attach the store-assigned identity and timestamps to a validated body.
fn hydrate(row: PgRow) -> Result<Customer, RepositoryError> {
    let id: Uuid = row.try_get("id")?;
    let doc: serde_json::Value = row.try_get("doc")?;
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    let updated_at: DateTime<Utc> = row.try_get("updated_at")?;
    Ok(Customer {
        id: CustomerId::new(id),
        fields: from_doc(COLLECTION, doc)?,
        created_at,
        updated_at,
    })
}

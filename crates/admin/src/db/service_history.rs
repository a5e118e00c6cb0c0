//! Service history repository.

use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use mowtrack_core::{CustomerId, ServiceHistoryId};

use super::{RepositoryError, classify, from_doc, to_doc};
use crate::models::{ServiceFields, ServiceHistory, ServiceHistoryPatch};

/// Collection backing service history entries.
const COLLECTION: &str = "service_history";

/// Repository for service history documents.
pub struct ServiceHistoryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ServiceHistoryRepository<'a> {
    /// Create a new service history repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Write a new service history document. The store assigns the
    /// identifier and stamps `created_at`; the referenced customer is not
    /// checked for existence.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` on transport/permission failure.
    pub async fn create(&self, fields: &ServiceFields) -> Result<ServiceHistoryId, RepositoryError> {
        let doc = to_doc(fields)?;
        let row = sqlx::query("INSERT INTO service_history (doc) VALUES ($1) RETURNING id")
            .bind(doc)
            .fetch_one(self.pool)
            .await
            .map_err(classify)?;
        let id: Uuid = row.try_get("id")?;
        Ok(ServiceHistoryId::new(id))
    }

    /// Merge a partial update into an existing entry. Service entries carry
    /// no `updated_at`, so only the document body changes.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no entry has this identifier,
    /// or `RepositoryError` on transport/permission failure.
    pub async fn update(
        &self,
        id: ServiceHistoryId,
        patch: &ServiceHistoryPatch,
    ) -> Result<(), RepositoryError> {
        let patch_doc = to_doc(patch)?;
        let result = sqlx::query("UPDATE service_history SET doc = doc || $2 WHERE id = $1")
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

    /// Remove a service history entry. Silent if already absent.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` on transport/permission failure.
    pub async fn delete(&self, id: ServiceHistoryId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM service_history WHERE id = $1")
            .bind(id.as_uuid())
            .execute(self.pool)
            .await
            .map_err(classify)?;
        Ok(())
    }

    /// Read every entry for one customer, newest service date first.
    /// Entries whose customer has since been deleted still read back here.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` on transport failure or if any stored
    /// document fails shape validation.
    pub async fn for_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<ServiceHistory>, RepositoryError> {
        // ISO dates sort correctly as text, so the equality filter and the
        // descending order both run on the document body.
        let rows = sqlx::query(
            "SELECT id, doc, created_at FROM service_history \
             WHERE doc->>'customer_id' = $1 \
             ORDER BY doc->>'date' DESC, created_at DESC",
        )
        .bind(customer_id.to_string())
        .fetch_all(self.pool)
        .await
        .map_err(classify)?;
        rows.into_iter().map(hydrate).collect()
    }
}

fn hydrate(row: PgRow) -> Result<ServiceHistory, RepositoryError> {
    let id: Uuid = row.try_get("id")?;
    let doc: serde_json::Value = row.try_get("doc")?;
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    Ok(ServiceHistory {
        id: ServiceHistoryId::new(id),
        fields: from_doc(COLLECTION, doc)?,
        created_at,
    })
}

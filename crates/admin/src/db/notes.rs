//! Note repository.

use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use mowtrack_core::{CustomerId, NoteId};

use super::{RepositoryError, classify, from_doc, to_doc};
use crate::models::{Note, NoteFields, NotePatch};

/// Collection backing notes.
const COLLECTION: &str = "notes";

/// Repository for note documents.
pub struct NoteRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> NoteRepository<'a> {
    /// Create a new note repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Write a new note. The store assigns the identifier and stamps
    /// `created_at = updated_at = now()`; the referenced customer is not
    /// checked for existence.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` on transport/permission failure.
    pub async fn create(&self, fields: &NoteFields) -> Result<NoteId, RepositoryError> {
        let doc = to_doc(fields)?;
        let row = sqlx::query("INSERT INTO notes (doc) VALUES ($1) RETURNING id")
            .bind(doc)
            .fetch_one(self.pool)
            .await
            .map_err(classify)?;
        let id: Uuid = row.try_get("id")?;
        Ok(NoteId::new(id))
    }

    /// Merge a partial update into an existing note and refresh
    /// `updated_at`, mirroring customers.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no note has this identifier,
    /// or `RepositoryError` on transport/permission failure.
    pub async fn update(&self, id: NoteId, patch: &NotePatch) -> Result<(), RepositoryError> {
        let patch_doc = to_doc(patch)?;
        let result =
            sqlx::query("UPDATE notes SET doc = doc || $2, updated_at = now() WHERE id = $1")
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

    /// Remove a note. Silent if already absent.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` on transport/permission failure.
    pub async fn delete(&self, id: NoteId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id.as_uuid())
            .execute(self.pool)
            .await
            .map_err(classify)?;
        Ok(())
    }

    /// Read every note for one customer, newest first. Notes whose
    /// customer has since been deleted still read back here.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` on transport failure or if any stored
    /// document fails shape validation.
    pub async fn for_customer(&self, customer_id: CustomerId) -> Result<Vec<Note>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT id, doc, created_at, updated_at FROM notes \
             WHERE doc->>'customer_id' = $1 \
             ORDER BY created_at DESC",
        )
        .bind(customer_id.to_string())
        .fetch_all(self.pool)
        .await
        .map_err(classify)?;
        rows.into_iter().map(hydrate).collect()
    }
}

fn hydrate(row: PgRow) -> Result<Note, RepositoryError> {
    let id: Uuid = row.try_get("id")?;
    let doc: serde_json::Value = row.try_get("doc")?;
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    let updated_at: DateTime<Utc> = row.try_get("updated_at")?;
    Ok(Note {
        id: NoteId::new(id),
        fields: from_doc(COLLECTION, doc)?,
        created_at,
        updated_at,
    })
}

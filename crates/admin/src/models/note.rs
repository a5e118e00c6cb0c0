//! Free-text note record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mowtrack_core::{CustomerId, NoteId};

/// The document body of a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteFields {
    /// Plain reference; orphaned notes are tolerated.
    pub customer_id: CustomerId,
    pub content: String,
    /// Email of the admin who wrote the note.
    pub author: String,
}

/// A stored note.
#[derive(Debug, Clone)]
pub struct Note {
    pub id: NoteId,
    pub fields: NoteFields,
    pub created_at: DateTime<Utc>,
    /// Refreshed on every write, mirroring customers.
    pub updated_at: DateTime<Utc>,
}

/// Partial update for a note document.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NotePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn documents_missing_required_fields_are_rejected() {
        let doc = serde_json::json!({
            "customer_id": Uuid::new_v4(),
            "content": "Prefers Saturday pickups"
        });
        assert!(serde_json::from_value::<NoteFields>(doc).is_err());
    }

    #[test]
    fn empty_patch_serializes_to_empty_object() {
        let value = serde_json::to_value(NotePatch::default()).expect("serialize");
        assert_eq!(value, serde_json::json!({}));
    }
}

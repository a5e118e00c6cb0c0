//! Service history record types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use mowtrack_core::{Cost, CustomerId, ServiceHistoryId, ServiceStatus};

/// The document body of a service history entry.
///
/// `customer_id` is a plain reference: the store does not verify that the
/// customer exists, and entries survive the deletion of their customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceFields {
    pub customer_id: CustomerId,
    /// Calendar date the work was (or will be) done. Display order is
    /// newest date first.
    pub date: NaiveDate,
    pub service_type: String,
    pub description: String,
    pub technician: String,
    pub cost: Cost,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parts: Option<String>,
    pub status: ServiceStatus,
}

/// A stored service history entry.
#[derive(Debug, Clone)]
pub struct ServiceHistory {
    pub id: ServiceHistoryId,
    pub fields: ServiceFields,
    /// Set exactly once, when the document is first written. Service
    /// entries carry no `updated_at`; they are never touched automatically.
    pub created_at: DateTime<Utc>,
}

/// Partial update for a service history document.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ServiceHistoryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technician: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<Cost>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parts: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ServiceStatus>,
}

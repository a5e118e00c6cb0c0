//! Customer record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mowtrack_core::{CustomerId, Email};

/// Mailing address block on a customer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// The mower a customer bought from us or brings in for repair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MowerDetails {
    pub brand: String,
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_year: Option<i32>,
}

impl MowerDetails {
    /// "Brand Model" line for list cards and the detail header.
    #[must_use]
    pub fn display_line(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }
}

/// The document body of a customer record.
///
/// This is both the create input and the shape every stored customer
/// document must deserialize into before it reaches application code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerFields {
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub phone: String,
    pub address: Address,
    pub mower_details: MowerDetails,
}

impl CustomerFields {
    /// "First Last" for display.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Two-letter initials for the list avatar.
    #[must_use]
    pub fn initials(&self) -> String {
        let first = self.first_name.chars().next();
        let last = self.last_name.chars().next();
        first
            .into_iter()
            .chain(last)
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Case-insensitive substring match against first name, last name,
    /// email, and phone. An empty query matches every customer; the list
    /// screen applies this over the full loaded set.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.first_name.to_lowercase().contains(&needle)
            || self.last_name.to_lowercase().contains(&needle)
            || self.email.as_str().to_lowercase().contains(&needle)
            || self.phone.to_lowercase().contains(&needle)
    }
}

/// A stored customer: document body plus store-assigned identity and timestamps.
#[derive(Debug, Clone)]
pub struct Customer {
    pub id: CustomerId,
    pub fields: CustomerFields,
    /// Set exactly once, when the document is first written.
    pub created_at: DateTime<Utc>,
    /// Refreshed by the store on every write.
    pub updated_at: DateTime<Utc>,
}

/// Partial update for a customer document.
///
/// Only the fields that are set serialize, so the store merge touches
/// nothing else. `address` and `mower_details` replace their whole block,
/// mirroring how the document store merges nested maps.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CustomerPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mower_details: Option<MowerDetails>,
}

//! Customer detail screen: service history and notes.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::Redirect,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use tracing::instrument;

use mowtrack_core::{Cost, CustomerId, NoteId, ServiceHistoryId, ServiceStatus};

use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::models::{Customer, Note, NoteFields, ServiceFields, ServiceHistory};
use crate::state::AppState;

use super::customers::none_if_empty;

// =============================================================================
// Query & Form Types
// =============================================================================

/// Detail screen query parameters.
#[derive(Debug, Deserialize)]
pub struct TabQuery {
    pub tab: Option<String>,
}

/// Inline add-service form on the detail screen.
#[derive(Debug, Deserialize)]
pub struct ServiceEntryForm {
    pub date: String,
    pub service_type: String,
    pub description: String,
    pub technician: String,
    pub cost: String,
    #[serde(default)]
    pub parts: String,
    pub status: String,
}

/// Inline add-note form on the detail screen.
#[derive(Debug, Deserialize)]
pub struct NoteForm {
    pub content: String,
}

// =============================================================================
// View Types
// =============================================================================

/// Customer header block on the detail screen.
#[derive(Debug, Clone)]
pub struct CustomerHeaderView {
    pub id: String,
    pub name: String,
    pub initials: String,
    pub email: String,
    pub phone: String,
    pub street: String,
    pub locality: String,
    pub mower: String,
    pub serial_number: String,
    pub purchase_year: String,
    pub member_since: String,
}

impl From<&Customer> for CustomerHeaderView {
    fn from(customer: &Customer) -> Self {
        let address = &customer.fields.address;
        Self {
            id: customer.id.to_string(),
            name: customer.fields.full_name(),
            initials: customer.fields.initials(),
            email: customer.fields.email.to_string(),
            phone: customer.fields.phone.clone(),
            street: address.street.clone(),
            locality: format!("{}, {} {}", address.city, address.state, address.zip_code),
            mower: customer.fields.mower_details.display_line(),
            serial_number: customer
                .fields
                .mower_details
                .serial_number
                .clone()
                .unwrap_or_default(),
            purchase_year: customer
                .fields
                .mower_details
                .purchase_year
                .map(|y| y.to_string())
                .unwrap_or_default(),
            member_since: customer.created_at.format("%B %e, %Y").to_string(),
        }
    }
}

/// One service history row.
#[derive(Debug, Clone)]
pub struct ServiceRowView {
    pub id: String,
    pub date: String,
    pub service_type: String,
    pub description: String,
    pub technician: String,
    pub cost: String,
    pub parts: String,
    pub status: String,
}

impl From<&ServiceHistory> for ServiceRowView {
    fn from(entry: &ServiceHistory) -> Self {
        Self {
            id: entry.id.to_string(),
            date: entry.fields.date.format("%b %e, %Y").to_string(),
            service_type: entry.fields.service_type.clone(),
            description: entry.fields.description.clone(),
            technician: entry.fields.technician.clone(),
            cost: entry.fields.cost.display_dollars(),
            parts: entry.fields.parts.clone().unwrap_or_default(),
            status: entry.fields.status.to_string(),
        }
    }
}

/// One option in the service status select.
#[derive(Debug, Clone)]
pub struct StatusOptionView {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// The status select options, with the default status pre-selected.
fn status_options() -> Vec<StatusOptionView> {
    ServiceStatus::ALL
        .iter()
        .map(|status| StatusOptionView {
            value: status.as_str(),
            label: match status {
                ServiceStatus::Completed => "Completed",
                ServiceStatus::Pending => "Pending",
                ServiceStatus::Scheduled => "Scheduled",
            },
            selected: *status == ServiceStatus::default(),
        })
        .collect()
}

/// One note row.
#[derive(Debug, Clone)]
pub struct NoteRowView {
    pub id: String,
    pub author: String,
    pub created: String,
    pub content: String,
}

impl From<&Note> for NoteRowView {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id.to_string(),
            author: note.fields.author.clone(),
            created: note.created_at.format("%b %e, %Y %H:%M").to_string(),
            content: note.fields.content.clone(),
        }
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Customer detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "customers/detail.html")]
pub struct CustomerDetailTemplate {
    pub current_email: String,
    pub customer: CustomerHeaderView,
    pub tab: String,
    pub history: Vec<ServiceRowView>,
    pub notes: Vec<NoteRowView>,
    pub statuses: Vec<StatusOptionView>,
    pub today: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Customer detail. The customer, its service history, and its notes are
/// loaded concurrently; the screen renders only once all three are in.
#[instrument(skip(user, state))]
pub async fn show(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<CustomerId>,
    Query(query): Query<TabQuery>,
) -> Result<CustomerDetailTemplate> {
    let customers = state.customers();
    let services = state.service_history();
    let notes = state.notes();

    let (customer, history, notes) = tokio::join!(
        customers.get(id),
        services.for_customer(id),
        notes.for_customer(id),
    );

    let customer = customer?.ok_or_else(|| AppError::NotFound(format!("customer {id}")))?;
    let history = history?;
    let notes = notes?;

    let tab = match query.tab.as_deref() {
        Some("notes") => "notes",
        _ => "history",
    };

    Ok(CustomerDetailTemplate {
        current_email: user.email.to_string(),
        customer: CustomerHeaderView::from(&customer),
        tab: tab.to_string(),
        history: history.iter().map(ServiceRowView::from).collect(),
        notes: notes.iter().map(NoteRowView::from).collect(),
        statuses: status_options(),
        today: Utc::now().date_naive().to_string(),
    })
}

/// Add a service history entry for this customer.
#[instrument(skip(_auth, state, form))]
pub async fn add_service(
    _auth: RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<CustomerId>,
    Form(form): Form<ServiceEntryForm>,
) -> Result<Redirect> {
    let date = form
        .date
        .parse::<NaiveDate>()
        .map_err(|_| AppError::BadRequest(format!("invalid service date: {}", form.date)))?;
    let cost = form
        .cost
        .parse::<Cost>()
        .map_err(|e| AppError::BadRequest(format!("invalid cost: {e}")))?;
    let status = form
        .status
        .parse::<ServiceStatus>()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let fields = ServiceFields {
        customer_id: id,
        date,
        service_type: form.service_type,
        description: form.description,
        technician: form.technician,
        cost,
        parts: none_if_empty(form.parts),
        status,
    };

    let service_id = state.service_history().create(&fields).await?;
    tracing::info!(customer_id = %id, service_id = %service_id, "service entry added");
    Ok(Redirect::to(&format!("/customers/{id}?tab=history")))
}

/// Remove a service history entry.
#[instrument(skip(_auth, state))]
pub async fn delete_service(
    _auth: RequireAuth,
    State(state): State<AppState>,
    Path((id, service_id)): Path<(CustomerId, ServiceHistoryId)>,
) -> Result<Redirect> {
    state.service_history().delete(service_id).await?;
    tracing::info!(customer_id = %id, service_id = %service_id, "service entry removed");
    Ok(Redirect::to(&format!("/customers/{id}?tab=history")))
}

/// Add a note for this customer, authored by the signed-in admin.
#[instrument(skip(user, state, form))]
pub async fn add_note(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<CustomerId>,
    Form(form): Form<NoteForm>,
) -> Result<Redirect> {
    let content = form.content.trim().to_owned();
    if content.is_empty() {
        return Err(AppError::BadRequest("note content cannot be empty".to_string()));
    }

    let fields = NoteFields {
        customer_id: id,
        content,
        author: user.email.to_string(),
    };

    let note_id = state.notes().create(&fields).await?;
    tracing::info!(customer_id = %id, note_id = %note_id, "note added");
    Ok(Redirect::to(&format!("/customers/{id}?tab=notes")))
}

/// Remove a note.
#[instrument(skip(_auth, state))]
pub async fn delete_note(
    _auth: RequireAuth,
    State(state): State<AppState>,
    Path((id, note_id)): Path<(CustomerId, NoteId)>,
) -> Result<Redirect> {
    state.notes().delete(note_id).await?;
    tracing::info!(customer_id = %id, note_id = %note_id, "note removed");
    Ok(Redirect::to(&format!("/customers/{id}?tab=notes")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_select_covers_every_status_with_pending_preselected() {
        let options = status_options();

        assert_eq!(options.len(), ServiceStatus::ALL.len());
        for status in ServiceStatus::ALL {
            assert!(
                options.iter().any(|o| o.value == status.as_str()),
                "missing option for {status}"
            );
        }

        let selected: Vec<_> = options.iter().filter(|o| o.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].value, "pending");
    }
}

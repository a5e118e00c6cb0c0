//! Customer list, create/edit form, and delete route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::Redirect,
};
use serde::Deserialize;
use tracing::instrument;

use mowtrack_core::{CustomerId, Email};

use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::models::{Address, Customer, CustomerFields, CustomerPatch, MowerDetails};
use crate::state::AppState;

// =============================================================================
// Query & Form Types
// =============================================================================

/// List screen query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// Customer form data, shared between create and edit.
///
/// Optional inputs arrive as empty strings; numbers arrive as text. The
/// conversion to [`CustomerFields`] owns that cleanup.
#[derive(Debug, Deserialize)]
pub struct CustomerForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub brand: String,
    pub model: String,
    #[serde(default)]
    pub serial_number: String,
    #[serde(default)]
    pub purchase_year: String,
}

impl CustomerForm {
    fn into_fields(self) -> Result<CustomerFields> {
        let email = Email::parse(self.email.trim())
            .map_err(|e| AppError::BadRequest(format!("invalid email: {e}")))?;

        let serial_number = none_if_empty(self.serial_number);
        let purchase_year = match none_if_empty(self.purchase_year) {
            Some(year) => Some(year.trim().parse::<i32>().map_err(|_| {
                AppError::BadRequest(format!("invalid purchase year: {year}"))
            })?),
            None => None,
        };

        Ok(CustomerFields {
            first_name: self.first_name,
            last_name: self.last_name,
            email,
            phone: self.phone,
            address: Address {
                street: self.street,
                city: self.city,
                state: self.state,
                zip_code: self.zip_code,
            },
            mower_details: MowerDetails {
                brand: self.brand,
                model: self.model,
                serial_number,
                purchase_year,
            },
        })
    }
}

pub(crate) fn none_if_empty(s: String) -> Option<String> {
    if s.trim().is_empty() { None } else { Some(s) }
}

// =============================================================================
// View Types
// =============================================================================

/// Customer card for the list screen.
#[derive(Debug, Clone)]
pub struct CustomerCardView {
    pub id: String,
    pub name: String,
    pub initials: String,
    pub email: String,
    pub phone: String,
    pub mower: String,
}

impl From<&Customer> for CustomerCardView {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id.to_string(),
            name: customer.fields.full_name(),
            initials: customer.fields.initials(),
            email: customer.fields.email.to_string(),
            phone: customer.fields.phone.clone(),
            mower: customer.fields.mower_details.display_line(),
        }
    }
}

/// Pre-populated (or blank) values for the customer form.
#[derive(Debug, Clone, Default)]
pub struct CustomerFormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub brand: String,
    pub model: String,
    pub serial_number: String,
    pub purchase_year: String,
}

impl From<&CustomerFields> for CustomerFormValues {
    fn from(fields: &CustomerFields) -> Self {
        Self {
            first_name: fields.first_name.clone(),
            last_name: fields.last_name.clone(),
            email: fields.email.to_string(),
            phone: fields.phone.clone(),
            street: fields.address.street.clone(),
            city: fields.address.city.clone(),
            state: fields.address.state.clone(),
            zip_code: fields.address.zip_code.clone(),
            brand: fields.mower_details.brand.clone(),
            model: fields.mower_details.model.clone(),
            serial_number: fields.mower_details.serial_number.clone().unwrap_or_default(),
            purchase_year: fields
                .mower_details
                .purchase_year
                .map(|y| y.to_string())
                .unwrap_or_default(),
        }
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Customer list page template.
#[derive(Template, WebTemplate)]
#[template(path = "customers/index.html")]
pub struct CustomersIndexTemplate {
    pub current_email: String,
    pub customers: Vec<CustomerCardView>,
    pub query: String,
}

/// Customer create/edit form template.
#[derive(Template, WebTemplate)]
#[template(path = "customers/form.html")]
pub struct CustomerFormTemplate {
    pub current_email: String,
    pub heading: String,
    pub action: String,
    pub submit_label: String,
    pub values: CustomerFormValues,
}

// =============================================================================
// Handlers
// =============================================================================

/// Customer list. Loads the full set and filters in memory, the same way
/// the screen would filter an already-loaded list.
#[instrument(skip(user, state))]
pub async fn index(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Query(search): Query<SearchQuery>,
) -> Result<CustomersIndexTemplate> {
    let query = search.q.unwrap_or_default();

    let customers = state.customers().list().await?;
    let customers: Vec<CustomerCardView> = customers
        .iter()
        .filter(|c| c.fields.matches(&query))
        .map(CustomerCardView::from)
        .collect();

    Ok(CustomersIndexTemplate {
        current_email: user.email.to_string(),
        customers,
        query,
    })
}

/// Blank customer form.
pub async fn new_page(RequireAuth(user): RequireAuth) -> CustomerFormTemplate {
    CustomerFormTemplate {
        current_email: user.email.to_string(),
        heading: "Add Customer".to_string(),
        action: "/customers".to_string(),
        submit_label: "Create customer".to_string(),
        values: CustomerFormValues::default(),
    }
}

/// Create a customer and land on its detail screen.
#[instrument(skip(_auth, state, form))]
pub async fn create(
    _auth: RequireAuth,
    State(state): State<AppState>,
    Form(form): Form<CustomerForm>,
) -> Result<Redirect> {
    let fields = form.into_fields()?;
    let id = state.customers().create(&fields).await?;
    tracing::info!(customer_id = %id, "customer created");
    Ok(Redirect::to(&format!("/customers/{id}")))
}

/// Pre-populated edit form.
pub async fn edit_page(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<CustomerId>,
) -> Result<CustomerFormTemplate> {
    let customer = state
        .customers()
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("customer {id}")))?;

    Ok(CustomerFormTemplate {
        current_email: user.email.to_string(),
        heading: format!("Edit {}", customer.fields.full_name()),
        action: format!("/customers/{id}"),
        submit_label: "Save changes".to_string(),
        values: CustomerFormValues::from(&customer.fields),
    })
}

/// Apply the edit form as a merge update.
#[instrument(skip(_auth, state, form))]
pub async fn update(
    _auth: RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<CustomerId>,
    Form(form): Form<CustomerForm>,
) -> Result<Redirect> {
    let fields = form.into_fields()?;
    let patch = CustomerPatch {
        first_name: Some(fields.first_name),
        last_name: Some(fields.last_name),
        email: Some(fields.email),
        phone: Some(fields.phone),
        address: Some(fields.address),
        mower_details: Some(fields.mower_details),
    };
    state.customers().update(id, &patch).await?;
    tracing::info!(customer_id = %id, "customer updated");
    Ok(Redirect::to(&format!("/customers/{id}")))
}

/// Delete a customer. Related service history and notes are left behind.
#[instrument(skip(_auth, state))]
pub async fn delete(
    _auth: RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<CustomerId>,
) -> Result<Redirect> {
    state.customers().delete(id).await?;
    tracing::info!(customer_id = %id, "customer deleted");
    Ok(Redirect::to("/customers"))
}

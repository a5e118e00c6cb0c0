//! HTTP route handlers for the admin panel.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Redirect to /customers
//! GET  /health                 - Liveness check (unauthenticated)
//! GET  /health/ready           - Readiness check (unauthenticated)
//!
//! # Auth
//! GET  /login                  - Sign-in screen
//! POST /login                  - Sign-in action
//! POST /logout                 - Sign-out action
//!
//! # Customers (all require a signed-in session)
//! GET  /customers              - Customer list; ?q= filters client-side-style
//! GET  /customers/new          - Blank customer form
//! POST /customers              - Create customer
//! GET  /customers/{id}         - Customer detail; ?tab=history|notes
//! POST /customers/{id}         - Update customer
//! GET  /customers/{id}/edit    - Pre-populated customer form
//! POST /customers/{id}/delete  - Delete customer (no cascade)
//!
//! # Related records (from the detail screen)
//! POST /customers/{id}/service                        - Add service entry
//! POST /customers/{id}/service/{service_id}/delete    - Remove service entry
//! POST /customers/{id}/notes                          - Add note
//! POST /customers/{id}/notes/{note_id}/delete         - Remove note
//! ```

pub mod auth;
pub mod customer_detail;
pub mod customers;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use crate::middleware::RequireAuth;
use crate::state::AppState;

/// Create the application router (health checks are mounted by the binary).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/customers", get(customers::index).post(customers::create))
        .route("/customers/new", get(customers::new_page))
        .route(
            "/customers/{id}",
            get(customer_detail::show).post(customers::update),
        )
        .route("/customers/{id}/edit", get(customers::edit_page))
        .route("/customers/{id}/delete", post(customers::delete))
        .route("/customers/{id}/service", post(customer_detail::add_service))
        .route(
            "/customers/{id}/service/{service_id}/delete",
            post(customer_detail::delete_service),
        )
        .route("/customers/{id}/notes", post(customer_detail::add_note))
        .route(
            "/customers/{id}/notes/{note_id}/delete",
            post(customer_detail::delete_note),
        )
}

/// The panel has no home page of its own; land on the customer list.
async fn root(_auth: RequireAuth) -> Redirect {
    Redirect::to("/customers")
}

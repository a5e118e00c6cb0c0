//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::AdminConfig;
use crate::db::{CustomerRepository, NoteRepository, ServiceHistoryRepository};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the database pool and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    pool: PgPool,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: AdminConfig, pool: PgPool) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, pool }),
        }
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Customer repository bound to the shared pool.
    #[must_use]
    pub fn customers(&self) -> CustomerRepository<'_> {
        CustomerRepository::new(self.pool())
    }

    /// Service history repository bound to the shared pool.
    #[must_use]
    pub fn service_history(&self) -> ServiceHistoryRepository<'_> {
        ServiceHistoryRepository::new(self.pool())
    }

    /// Note repository bound to the shared pool.
    #[must_use]
    pub fn notes(&self) -> NoteRepository<'_> {
        NoteRepository::new(self.pool())
    }
}

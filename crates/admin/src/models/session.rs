//! Session-related types.
//!
//! Types stored in the session for authentication state.

use serde::{Deserialize, Serialize};

use mowtrack_core::Email;

/// Session-stored admin identity.
///
/// Minimal data stored in the session to identify the signed-in admin.
/// This is the only authentication state in the process; it is created on
/// sign-in, removed on sign-out, and reaches handlers exclusively through
/// the `RequireAuth`/`OptionalAuth` extractors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// The admin's email address.
    pub email: Email,
}

/// Session keys for authentication data.
pub mod session_keys {
    /// Key for storing the currently signed-in admin.
    pub const CURRENT_USER: &str = "current_user";
}

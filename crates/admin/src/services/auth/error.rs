//! Authentication error types.

use thiserror::Error;

use mowtrack_core::EmailError;

/// Errors from the authentication service.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email/password pair did not verify.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The submitted email is not structurally valid.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// The stored password hash could not be parsed or applied.
    #[error("password hash error: {0}")]
    Hash(String),
}

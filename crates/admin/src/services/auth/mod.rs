//! Authentication service.
//!
//! Verifies sign-ins against the single admin credential pair carried in
//! configuration. There is no user table: the panel is single-tenant and
//! any signed-in session has full access.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use secrecy::ExposeSecret;

use mowtrack_core::Email;

use crate::config::AdminConfig;
use crate::models::CurrentUser;

/// Authentication service.
pub struct AuthService<'a> {
    config: &'a AdminConfig,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(config: &'a AdminConfig) -> Self {
        Self { config }
    }

    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email is malformed and
    /// `AuthError::InvalidCredentials` if the pair does not verify.
    pub fn login_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<CurrentUser, AuthError> {
        let email = Email::parse(email)?;

        if !email
            .as_str()
            .eq_ignore_ascii_case(self.config.admin_email.as_str())
        {
            return Err(AuthError::InvalidCredentials);
        }

        verify_password(password, self.config.admin_password_hash.expose_secret())?;

        Ok(CurrentUser {
            email: self.config.admin_email.clone(),
        })
    }
}

/// Hash a password into an Argon2 PHC string.
///
/// Used to generate the value for `MOWTRACK_ADMIN_PASSWORD_HASH`.
///
/// # Errors
///
/// Returns `AuthError::Hash` if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::Hash(e.to_string()))?;
    Ok(hash.to_string())
}

/// Verify a password against an Argon2 PHC string.
///
/// # Errors
///
/// Returns `AuthError::Hash` if the stored hash is malformed and
/// `AuthError::InvalidCredentials` if the password does not match.
pub fn verify_password(password: &str, phc_hash: &str) -> Result<(), AuthError> {
    let parsed = PasswordHash::new(phc_hash).map_err(|e| AuthError::Hash(e.to_string()))?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| AuthError::InvalidCredentials)
}

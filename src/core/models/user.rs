//! User model and credential inputs

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ValidationError;

/// A registered user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user id
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Email address (unique across users)
    pub email: String,

    /// Argon2 hash of the user's password
    pub password_hash: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Registration form input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterInput {
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Password in plaintext (only transmitted, never stored)
    pub password: String,
    /// Password confirmation; must match `password`
    pub confirm_password: String,
}

/// Login form input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginInput {
    /// Email address
    pub email: String,
    /// Password in plaintext
    pub password: String,
}

/// Minimal email shape check: one `@` with a dot somewhere after it
fn is_valid_email(email: &str) -> bool {
    email.split_once('@').is_some_and(|(local, domain)| {
        !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
    })
}

impl RegisterInput {
    /// Validate field constraints, reporting the first failing field
    ///
    /// # Errors
    /// Returns a [`ValidationError`] naming the first field that violates its
    /// constraint.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.len() < 2 {
            return Err(ValidationError::new(
                "name",
                "Name must be at least 2 characters",
            ));
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::new(
                "email",
                "Please enter a valid email",
            ));
        }
        if self.password.len() < 6 {
            return Err(ValidationError::new(
                "password",
                "Password must be at least 6 characters",
            ));
        }
        if self.confirm_password != self.password {
            return Err(ValidationError::new(
                "confirm_password",
                "Passwords do not match",
            ));
        }
        Ok(())
    }
}

impl LoginInput {
    /// Validate field constraints, reporting the first failing field
    ///
    /// # Errors
    /// Returns a [`ValidationError`] naming the first field that violates its
    /// constraint.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_valid_email(&self.email) {
            return Err(ValidationError::new(
                "email",
                "Please enter a valid email",
            ));
        }
        if self.password.len() < 6 {
            return Err(ValidationError::new(
                "password",
                "Password must be at least 6 characters",
            ));
        }
        Ok(())
    }
}

/// Hash a password with Argon2 and a fresh random salt
///
/// # Errors
/// Returns an error string if hashing fails.
pub fn hash_password(password: &str) -> Result<String, String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| format!("Failed to hash password: {e}"))
}

/// Verify a plaintext password against a stored Argon2 hash.
///
/// Malformed stored hashes verify as false rather than erroring.
#[must_use]
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    PasswordHash::new(stored_hash).is_ok_and(|parsed| {
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    })
}

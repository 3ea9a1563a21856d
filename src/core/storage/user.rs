//! User persistence and authentication

use chrono::Utc;
use uuid::Uuid;

use super::{StorageError, Store, USERS_KEY};
use crate::core::models::user::{hash_password, verify_password};
use crate::core::models::{LoginInput, RegisterInput, User};

/// Typed access to the persisted user list
#[derive(Debug)]
pub struct UserStore<'a> {
    store: &'a Store,
}

impl<'a> UserStore<'a> {
    /// Create a user store over the given backing store
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// All registered users
    #[must_use]
    pub fn list(&self) -> Vec<User> {
        self.store.get(USERS_KEY).unwrap_or_default()
    }

    /// Look up a user by id
    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<User> {
        self.list().into_iter().find(|user| user.id == id)
    }

    /// Look up a user by email
    #[must_use]
    pub fn find_by_email(&self, email: &str) -> Option<User> {
        self.list().into_iter().find(|user| user.email == email)
    }

    /// Register a new user.
    ///
    /// Validates the input, rejects duplicate emails, and stores the
    /// password as an Argon2 hash.
    ///
    /// # Errors
    /// Returns [`StorageError::Validation`] for invalid input,
    /// [`StorageError::DuplicateEmail`] when the email is taken, or a
    /// storage error if the collection cannot be written.
    pub fn register(&self, input: &RegisterInput) -> Result<User, StorageError> {
        input.validate()?;

        let mut users = self.list();
        if users.iter().any(|user| user.email == input.email) {
            return Err(StorageError::DuplicateEmail {
                email: input.email.clone(),
            });
        }

        let user = User {
            id: Uuid::new_v4(),
            name: input.name.clone(),
            email: input.email.clone(),
            password_hash: hash_password(&input.password).map_err(StorageError::PasswordHash)?,
            created_at: Utc::now(),
        };

        users.push(user.clone());
        self.store.set(USERS_KEY, &users)?;

        Ok(user)
    }

    /// Delete a user by id.
    ///
    /// # Errors
    /// Returns [`StorageError::UserNotFound`] for an unknown id; the stored
    /// collection is left unchanged in that case.
    pub fn delete(&self, id: Uuid) -> Result<(), StorageError> {
        let users = self.list();
        let remaining: Vec<User> = users.iter().filter(|user| user.id != id).cloned().collect();

        if remaining.len() == users.len() {
            return Err(StorageError::UserNotFound { id });
        }

        self.store.set(USERS_KEY, &remaining)?;
        Ok(())
    }

    /// Authenticate a user by email and password.
    ///
    /// # Errors
    /// Returns [`StorageError::Validation`] for malformed input, or
    /// [`StorageError::InvalidCredentials`] when the email is unknown or the
    /// password does not verify. The two failure causes are
    /// indistinguishable to the caller.
    pub fn authenticate(&self, input: &LoginInput) -> Result<User, StorageError> {
        input.validate()?;

        let user = self
            .find_by_email(&input.email)
            .ok_or(StorageError::InvalidCredentials)?;

        if !verify_password(&input.password, &user.password_hash) {
            return Err(StorageError::InvalidCredentials);
        }

        Ok(user)
    }
}

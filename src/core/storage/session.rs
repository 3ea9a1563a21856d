//! Login session persistence
//!
//! The session is an explicit value loaded once per command and passed to
//! whatever needs the acting user, rather than ambient global state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{StorageError, Store, SESSION_KEY};
use crate::core::models::User;
use crate::core::storage::UserStore;

/// The logged-in user pointer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Id of the logged-in user
    pub user_id: Uuid,
    /// When the session was started
    pub started_at: DateTime<Utc>,
}

impl Session {
    /// Start a session for a user and persist it
    ///
    /// # Errors
    /// Returns a storage error if the session cannot be written.
    pub fn begin(store: &Store, user: &User) -> Result<Self, StorageError> {
        let session = Self {
            user_id: user.id,
            started_at: Utc::now(),
        };
        store.set(SESSION_KEY, &session)?;
        Ok(session)
    }

    /// Load the current session, if any
    #[must_use]
    pub fn load(store: &Store) -> Option<Self> {
        store.get(SESSION_KEY)
    }

    /// End the current session
    ///
    /// # Errors
    /// Returns a storage error if the session file cannot be removed.
    pub fn end(store: &Store) -> Result<(), StorageError> {
        store.remove(SESSION_KEY)
    }

    /// Resolve the session's user record.
    ///
    /// # Errors
    /// Returns [`StorageError::UserNotFound`] when the pointed-at user no
    /// longer exists (stale session).
    pub fn user(&self, store: &Store) -> Result<User, StorageError> {
        UserStore::new(store)
            .get(self.user_id)
            .ok_or(StorageError::UserNotFound { id: self.user_id })
    }
}

//! Persistence layer for `AcadTrack`
//!
//! A synchronous key-value store over JSON files in the configured data
//! directory, plus typed stores for users, courses, and the login session.
//! Each collection lives under a fixed string key and is rewritten whole on
//! every mutation; there is no partial update and no cross-process
//! consistency guarantee.

pub mod course;
pub mod session;
pub mod user;

pub use course::CourseStore;
pub use session::Session;
pub use user::UserStore;

use crate::core::models::ValidationError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Storage key for the user list
pub const USERS_KEY: &str = "users";
/// Storage key for the course list
pub const COURSES_KEY: &str = "courses";
/// Storage key for the current session pointer
pub const SESSION_KEY: &str = "session";

/// Errors raised by the storage layer
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A user with the given email is already registered
    #[error("User with this email already exists")]
    DuplicateEmail {
        /// The conflicting email address
        email: String,
    },

    /// The user already has a course with the given code
    #[error("Course with this code already exists")]
    DuplicateCourseCode {
        /// The conflicting course code
        code: String,
    },

    /// No course with the given id exists
    #[error("Course not found")]
    CourseNotFound {
        /// The id that was looked up
        id: Uuid,
    },

    /// No user with the given id exists
    #[error("User not found")]
    UserNotFound {
        /// The id that was looked up
        id: Uuid,
    },

    /// Login failed; identical for unknown email and bad password
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Input failed field validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Password hashing failed
    #[error("{0}")]
    PasswordHash(String),

    /// Filesystem failure while reading or writing a collection
    #[error("Storage I/O error at {path}: {source}")]
    Io {
        /// The file involved
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// A collection could not be serialized
    #[error("Storage serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// JSON-file-backed key-value store.
///
/// Each key maps to `<root>/<key>.json`. Values are any JSON-serializable
/// type; readers get `None` for missing or unreadable entries.
#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Open a store rooted at the given directory, creating it if needed
    ///
    /// # Errors
    /// Returns [`StorageError::Io`] if the directory cannot be created.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| StorageError::Io {
            path: root.clone(),
            source,
        })?;
        Ok(Self { root })
    }

    /// Path of the file backing a key
    #[must_use]
    pub fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Read a value by key.
    ///
    /// Missing files and undecodable content both yield `None`; decode
    /// failures are logged rather than surfaced.
    #[must_use]
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.key_path(key);
        if !path.exists() {
            return None;
        }

        match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(value) => Some(value),
                Err(e) => {
                    crate::error!("Error reading {key} from storage: {e}");
                    None
                }
            },
            Err(e) => {
                crate::error!("Error reading {key} from storage: {e}");
                None
            }
        }
    }

    /// Write a value under a key, replacing any previous content
    ///
    /// # Errors
    /// Returns [`StorageError::Json`] if the value cannot be serialized, or
    /// [`StorageError::Io`] if the file cannot be written.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let path = self.key_path(key);
        let content = serde_json::to_string_pretty(value)?;
        fs::write(&path, content).map_err(|source| StorageError::Io { path, source })
    }

    /// Remove a key; removing an absent key is not an error
    ///
    /// # Errors
    /// Returns [`StorageError::Io`] if the file exists but cannot be removed.
    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(&path).map_err(|source| StorageError::Io { path, source })?;
        }
        Ok(())
    }

    /// Root directory of this store
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

//! Command handlers for the `AcadTrack` CLI

pub mod advise;
pub mod auth;
pub mod config;
pub mod course;
pub mod stats;
pub mod transcript;

use acadtrack::config::Config;
use acadtrack::core::models::User;
use acadtrack::core::storage::{Session, Store};

/// Open the data store configured under `paths.data_dir`
pub fn open_store(config: &Config) -> Result<Store, String> {
    Store::open(&config.paths.data_dir).map_err(|e| format!("✗ Failed to open data store: {e}"))
}

/// Resolve the logged-in user from the persisted session.
///
/// The session is loaded once here and the user record is handed to the
/// caller explicitly.
pub fn current_user(store: &Store) -> Result<User, String> {
    let session = Session::load(store)
        .ok_or_else(|| "✗ Not logged in. Use 'acadtrack login' first.".to_string())?;

    session
        .user(store)
        .map_err(|e| format!("✗ Session is stale: {e}. Use 'acadtrack login' again."))
}

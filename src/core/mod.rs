//! Core module for `AcadTrack` domain logic

pub mod advisor;
pub mod metrics;
pub mod models;
pub mod report;
pub mod storage;

/// Returns the current version of the `AcadTrack` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

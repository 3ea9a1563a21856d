//! Data models for `AcadTrack`

pub mod course;
pub mod user;

pub use course::{Course, CourseDraft, CourseStatus, Grade, Semester};
pub use user::{LoginInput, RegisterInput, User};

use std::fmt;

/// Validation failure for a single input field.
///
/// Validation stops at the first failing field, mirroring form-style
/// submission feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Name of the field that failed validation
    pub field: &'static str,
    /// Human-readable failure message
    pub message: String,
}

impl ValidationError {
    /// Create a new validation error for a field
    #[must_use]
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

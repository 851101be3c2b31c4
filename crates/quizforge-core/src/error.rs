//! Catalog lookup error types.
//!
//! The session engine itself has no fatal errors: unknown topics surface as
//! absent sessions and pool exhaustion degrades silently. These errors cover
//! the one place a caller-facing lookup can miss — resolving a course/unit
//! pair in the catalog.

use thiserror::Error;

/// Errors from resolving a unit in the course catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No course with the given identifier.
    #[error("course not found: {0}")]
    CourseNotFound(String),

    /// The course exists but has no unit with the given identifier.
    #[error("unit not found: {unit} (course {course})")]
    UnitNotFound { course: String, unit: String },

    /// The unit exists but carries no generator identifier, so no quiz can
    /// be served for it.
    #[error("unit {unit} has no quiz")]
    NoQuiz { unit: String },
}

impl CatalogError {
    /// Returns `true` if the unit was found but simply has nothing to serve.
    pub fn is_no_quiz(&self) -> bool {
        matches!(self, CatalogError::NoQuiz { .. })
    }
}

//! errors.rs - Custom error types for the nbclean-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// Convenience alias used throughout `nbclean-core`.
pub type Result<T, E = NotebookError> = std::result::Result<T, E>;

/// This enum represents all possible error types in the `nbclean-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum NotebookError {
    /// The document parsed as JSON but does not have the notebook shape
    /// the sanitizer walks (`path` is a JSON pointer to the offending value).
    #[error("Malformed notebook at '{path}': {reason}")]
    MalformedDocument { path: String, reason: String },

    #[error("Failed to parse notebook JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Failed to serialize notebook JSON: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl NotebookError {
    pub(crate) fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        NotebookError::MalformedDocument {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Returns true for the `MalformedDocument` variant.
    pub fn is_malformed(&self) -> bool {
        matches!(self, NotebookError::MalformedDocument { .. })
    }
}

//! Load-time errors for the content catalog.
//!
//! Any of these aborts startup: the app must not serve with corrupt content.

use crate::schema::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{document} is not valid JSON: {source}")]
    Parse {
        document: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{document} failed validation: {source}")]
    Validation {
        document: &'static str,
        #[source]
        source: ValidationError,
    },

    #[error("Duplicate id '{id}' in {catalog}")]
    DuplicateId { catalog: String, id: String },

    #[error("Course levels for '{course_id}'/'{subject_id}' are defined more than once")]
    DuplicateLevels {
        course_id: String,
        subject_id: String,
    },

    #[error("{from} references unknown {kind} '{id}'")]
    UnknownReference {
        from: String,
        kind: &'static str,
        id: String,
    },

    #[error("Operation '{id}' has answer {answer}, expected {expected}")]
    InconsistentOperation {
        id: String,
        answer: i64,
        expected: String,
    },

    #[error("Page '{0}' is missing from pages.json")]
    MissingPage(&'static str),
}

/// Result type alias for catalog loading.
pub type Result<T> = std::result::Result<T, CatalogError>;

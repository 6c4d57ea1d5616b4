//! Canvass engine error types

use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CanvassError {
    #[error("Validation failed: {reason}")]
    Validation { reason: String },

    #[error("Failed to load roster from {path}: {reason}")]
    RosterLoad { path: String, reason: String },

    #[error("Failed to load annotations from {path}: {reason}")]
    AnnotationLoad { path: String, reason: String },

    #[error("Export failed: {reason}")]
    Export { reason: String },

    #[error("Configuration error: {field}")]
    Configuration { field: String },

    #[error("Shared component error")]
    Shared(#[from] SharedError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CanvassError {
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation { reason: reason.into() }
    }

    pub fn config(field: impl Into<String>) -> Self {
        Self::Configuration { field: field.into() }
    }
}

impl From<csv::Error> for CanvassError {
    fn from(error: csv::Error) -> Self {
        Self::Export { reason: error.to_string() }
    }
}

pub type CanvassResult<T> = Result<T, CanvassError>;

//! Shared error types for the canvassing workspace

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SharedError {
    #[error("Unknown category key: {key}")]
    UnknownCategory { key: String },

    #[error("Unknown status color: {input}")]
    UnknownStatusColor { input: String },

    #[error("Unknown custom category: {input}")]
    UnknownCustomCategory { input: String },

    #[error("Unknown annotation field: {input}")]
    UnknownAnnotationField { input: String },

    #[error("Invalid dataset id: {input}")]
    InvalidDatasetId { input: String },
}

pub type SharedResult<T> = Result<T, SharedError>;

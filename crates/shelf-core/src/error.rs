//! Error types for the shelf library.

use thiserror::Error;

use crate::models::BookId;

/// Error type for all catalog-facing operations.
#[derive(Error, Debug)]
pub enum ShelfError {
    /// Book not found for the given ID
    #[error("Book with ID {id} not found")]
    BookNotFound { id: BookId },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Time zone lookup failed
    #[error("Unknown time zone '{name}': {source}")]
    InvalidTimeZone {
        name: String,
        #[source]
        source: jiff::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> ShelfError {
        ShelfError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl ShelfError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }
}

/// Result type alias for shelf operations
pub type Result<T> = std::result::Result<T, ShelfError>;

//! Error types for the Book actor.

use crate::model::ValidationError;
use thiserror::Error;

/// Errors that can occur during book operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BookError {
    /// The requested book was not found.
    #[error("Book not found: {0}")]
    NotFound(String),

    /// The request payload broke a field constraint.
    #[error("Book validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Book storage error: {0}")]
    Storage(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for BookError {
    fn from(msg: String) -> Self {
        BookError::ActorCommunicationError(msg)
    }
}

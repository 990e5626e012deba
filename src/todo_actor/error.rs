//! Error types for the Todo actor.

use crate::model::ValidationError;
use thiserror::Error;

/// Errors that can occur during todo operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TodoError {
    /// The todo does not exist, or belongs to someone else.
    #[error("Todo not found: {0}")]
    NotFound(String),

    /// No principal, or a principal without the required role.
    #[error("{0}")]
    Unauthorized(String),

    #[error("Todo validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The snapshot file could not be written or read.
    #[error("Todo storage error: {0}")]
    Storage(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for TodoError {
    fn from(msg: String) -> Self {
        TodoError::ActorCommunicationError(msg)
    }
}

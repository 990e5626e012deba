//! # Framework Errors
//!
//! This module defines the common error types used throughout the resource framework.
//! By centralizing error definitions, we ensure consistent error handling across
//! all actors and clients.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

/// Errors raised by a [`Table`](crate::Table) or one of its sessions.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot is not valid JSON: {0}")]
    Snapshot(#[from] serde_json::Error),
    #[error("duplicate id: {0}")]
    DuplicateId(String),
    #[error("id space exhausted")]
    IdsExhausted,
}

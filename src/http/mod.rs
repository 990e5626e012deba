//! # HTTP Surface
//!
//! Thin axum handlers over [`BookClient`] and [`TodoClient`]. A handler extracts the
//! request, calls exactly one client method and turns the result into a status:
//!
//! | Outcome            | Status |
//! |--------------------|--------|
//! | read               | 200    |
//! | create             | 201    |
//! | update / delete    | 204    |
//! | not found          | 404    |
//! | unauthorized       | 401    |
//! | validation failure | 422    |
//!
//! Error bodies are `{"detail": "..."}`, including requests whose path, query or body
//! fail to parse (see [`extract`]).

pub mod admin;
pub mod auth;
pub mod books;
pub mod error;
pub mod extract;
pub mod router;
pub mod todos;

pub use auth::{Authenticator, Caller, TokenTable};
pub use error::ApiError;
pub use router::router;

use crate::clients::{BookClient, TodoClient};
use std::sync::Arc;

/// Shared state of every handler.
#[derive(Clone)]
pub struct AppState {
    pub books: BookClient,
    pub todos: TodoClient,
    pub auth: Arc<dyn Authenticator>,
}

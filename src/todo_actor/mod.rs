//! # Todo Actor
//!
//! This module implements the Todo resource actor. Todos are owner-scoped and, when a
//! snapshot path is configured, persisted across restarts.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_framework::ActorEntity) implementation for [`Todo`]
//! - [`error`] - [`TodoError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use crud_recipe::model::TodoCreate;
//! use crud_recipe::todo_actor;
//! use resource_framework::Principal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = todo_actor::new(32, todo_actor::open_table(None)?);
//!     tokio::spawn(actor.run(()));
//!
//!     let alice = Principal::user(1);
//!     let params = TodoCreate {
//!         title: "Buy milk".to_string(),
//!         description: "Two litres".to_string(),
//!         priority: 2,
//!         complete: false,
//!     };
//!     let todo = client.create_todo(Some(&alice), params).await?;
//!     assert_eq!(todo.owner_id, 1);
//!
//!     // Nobody else can see it.
//!     let bob = Principal::user(2);
//!     assert!(client.todos(Some(&bob)).await?.is_empty());
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::TodoClient;
use crate::model::Todo;
use resource_framework::{ResourceActor, StorageError, Table};
use std::path::Path;

/// Creates a new Todo actor over `table` and its client.
pub fn new(buffer_size: usize, table: Table<Todo>) -> (ResourceActor<Todo>, TodoClient) {
    let (actor, generic_client) = ResourceActor::with_table(buffer_size, table);
    (actor, TodoClient::new(generic_client))
}

/// The todo table: file-backed when `snapshot` is given, in-memory otherwise.
pub fn open_table(snapshot: Option<&Path>) -> Result<Table<Todo>, StorageError> {
    match snapshot {
        Some(path) => Table::open(path),
        None => Ok(Table::in_memory()),
    }
}

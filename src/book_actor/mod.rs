//! # Book Actor
//!
//! This module implements the Book resource actor: a public, in-memory catalogue.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_framework::ActorEntity) implementation for [`Book`]
//! - [`error`] - [`BookError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use crud_recipe::book_actor;
//! use crud_recipe::model::BookQuery;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = book_actor::new(32, book_actor::seeded_table()?);
//!     tokio::spawn(actor.run(()));
//!
//!     let top_rated = client
//!         .books(BookQuery { book_rating: Some(5), published_date: None })
//!         .await?;
//!     assert_eq!(top_rated.len(), 3);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::BookClient;
use crate::model::{seed_books, Book};
use resource_framework::{ResourceActor, StorageError, Table};

/// Creates a new Book actor over `table` and its client.
pub fn new(buffer_size: usize, table: Table<Book>) -> (ResourceActor<Book>, BookClient) {
    let (actor, generic_client) = ResourceActor::with_table(buffer_size, table);
    (actor, BookClient::new(generic_client))
}

/// A table holding the starter catalogue. New books continue after the seeded ids.
pub fn seeded_table() -> Result<Table<Book>, StorageError> {
    Table::seeded(seed_books())
}

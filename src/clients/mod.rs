//! Type-safe wrappers around [`ResourceClient`](resource_framework::ResourceClient).

pub mod book_client;
pub mod todo_client;

pub use book_client::*;
pub use todo_client::*;

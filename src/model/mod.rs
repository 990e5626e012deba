//! Domain records, request payloads and their constraints.

pub mod book;
pub mod todo;
pub mod validation;

pub use book::*;
pub use todo::*;
pub use validation::ValidationError;

//! [`ActorEntity`] implementation for the [`Book`] domain type.
//!
//! Books carry no lifecycle side effects, so only the required methods are implemented.

use crate::book_actor::BookError;
use crate::model::{Book, BookCreate, BookId, BookPatch};
use async_trait::async_trait;
use resource_framework::ActorEntity;

#[async_trait]
impl ActorEntity for Book {
    type Id = BookId;
    type Create = BookCreate;
    type Patch = BookPatch;
    type Context = ();
    type Error = BookError;

    fn id(&self) -> BookId {
        self.id
    }

    /// Creates a new Book from creation parameters.
    fn from_create_params(id: BookId, params: BookCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            title: params.title,
            author: params.author,
            description: params.description,
            rating: params.rating,
            published_date: params.published_date,
        })
    }

    /// Merges a sparse patch into the book.
    ///
    /// # Fields Updated
    /// Any of `title`, `author`, `description`, `rating` and `published_date` that the
    /// patch carries a value for. The id is never touched.
    async fn on_update(&mut self, patch: BookPatch, _ctx: &()) -> Result<(), Self::Error> {
        patch.title.apply_to(&mut self.title);
        patch.author.apply_to(&mut self.author);
        patch.description.apply_to(&mut self.description);
        patch.rating.apply_to(&mut self.rating);
        patch.published_date.apply_to(&mut self.published_date);
        Ok(())
    }
}

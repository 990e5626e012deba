//! # Book Client
//!
//! Provides a high‑level API for interacting with the `Book` actor.
//! It wraps a `ResourceClient<Book>` and validates every payload before it is sent.
use crate::book_actor::BookError;
use crate::model::validation::positive_id;
use crate::model::{Book, BookCreate, BookId, BookQuery, BookUpdate};
use async_trait::async_trait;
use resource_framework::{ActorClient, FrameworkError, Public, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Book actor.
#[derive(Clone)]
pub struct BookClient {
    inner: ResourceClient<Book>,
}

impl BookClient {
    pub fn new(inner: ResourceClient<Book>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Book> for BookClient {
    type Error = BookError;
    type Policy = Public;

    fn inner(&self) -> &ResourceClient<Book> {
        &self.inner
    }

    fn policy(&self) -> &Public {
        &Public
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => BookError::NotFound(id),
            FrameworkError::Storage(e) => BookError::Storage(e.to_string()),
            other => BookError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl BookClient {
    #[instrument(skip(self))]
    pub async fn create_book(&self, params: BookCreate) -> Result<Book, BookError> {
        params.validate()?;
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// All books matching `query`, in id order.
    #[instrument(skip(self))]
    pub async fn books(&self, query: BookQuery) -> Result<Vec<Book>, BookError> {
        query.validate()?;
        self.list(None, query.filter()).await
    }

    #[instrument(skip(self))]
    pub async fn book(&self, id: BookId) -> Result<Book, BookError> {
        positive_id("book_id", id)?;
        self.get(None, id).await
    }

    #[instrument(skip(self))]
    pub async fn update_book(&self, update: BookUpdate) -> Result<Book, BookError> {
        update.validate()?;
        let (id, patch) = update.into_parts();
        debug!("Sending request");
        self.inner.update(id, patch).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn delete_book(&self, id: BookId) -> Result<(), BookError> {
        positive_id("book_id", id)?;
        self.delete(None, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BookPatch;
    use resource_framework::mock::{create_mock_client, expect_create, expect_update, MockClient};
    use resource_framework::Patch;

    fn book(id: u32, title: &str, rating: u8) -> Book {
        Book {
            id: BookId(id),
            title: title.into(),
            author: "codingwithroby".into(),
            description: "A very nice book!".into(),
            rating,
            published_date: 2030,
        }
    }

    #[tokio::test]
    async fn test_create_book_forwards_valid_payload() {
        let (client, mut receiver) = create_mock_client::<Book>(10);
        let book_client = BookClient::new(client);

        let params = BookCreate {
            title: "Master Endpoints".into(),
            author: "codingwithroby".into(),
            description: "A awesome book!".into(),
            rating: 5,
            published_date: 2029,
        };
        let expected = params.clone();
        let create_task = tokio::spawn(async move { book_client.create_book(params).await });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload, expected);
        responder.send(Ok(book(7, "Master Endpoints", 5))).unwrap();

        let created = create_task.await.unwrap().unwrap();
        assert_eq!(created.id, BookId(7));
    }

    #[tokio::test]
    async fn test_invalid_payload_never_reaches_the_actor() {
        let (client, mut receiver) = create_mock_client::<Book>(10);
        let book_client = BookClient::new(client);

        let params = BookCreate {
            title: "X".into(),
            author: "A".into(),
            description: "D".into(),
            rating: 5,
            published_date: 2029,
        };
        let result = book_client.create_book(params).await;
        assert!(matches!(result, Err(BookError::Validation(e)) if e.field == "title"));

        drop(book_client);
        assert!(receiver.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_update_book_sends_only_the_patch() {
        let (client, mut receiver) = create_mock_client::<Book>(10);
        let book_client = BookClient::new(client);

        let update: BookUpdate = serde_json::from_str(r#"{"id": 2, "title": "Yes"}"#).unwrap();
        let update_task = tokio::spawn(async move { book_client.update_book(update).await });

        let (id, patch, _scope, responder) = expect_update(&mut receiver)
            .await
            .expect("Expected Update request");
        assert_eq!(id, BookId(2));
        assert_eq!(
            patch,
            BookPatch {
                title: Patch::Value("Yes".into()),
                ..BookPatch::default()
            }
        );
        responder.send(Ok(book(2, "Yes", 3))).unwrap();

        assert_eq!(update_task.await.unwrap().unwrap().title, "Yes");
    }

    #[tokio::test]
    async fn test_missing_book_maps_to_not_found() {
        let mut mock = MockClient::<Book>::new();
        mock.expect_get(BookId(9)).return_ok(None);
        mock.expect_delete(BookId(9))
            .return_err(FrameworkError::NotFound("9".into()));

        let book_client = BookClient::new(mock.client());
        assert_eq!(
            book_client.book(BookId(9)).await,
            Err(BookError::NotFound("9".into()))
        );
        assert_eq!(
            book_client.delete_book(BookId(9)).await,
            Err(BookError::NotFound("9".into()))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_zero_id_is_a_validation_error() {
        let mock = MockClient::<Book>::new();
        let book_client = BookClient::new(mock.client());

        assert!(matches!(
            book_client.book(BookId(0)).await,
            Err(BookError::Validation(_))
        ));
        mock.verify();
    }
}

use crate::book_actor;
use crate::clients::{BookClient, TodoClient};
use crate::http::{self, AppState, Authenticator};
use crate::lifecycle::ServiceConfig;
use crate::todo_actor;
use resource_framework::{StorageError, Table};
use std::sync::Arc;
use tracing::{error, info};

/// The runtime orchestrator for the books and todos services.
///
/// `ServiceSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping both store actors
/// - **Storage Setup**: Seeding the book catalogue and opening the todo snapshot
/// - **Wiring**: Handing the clients to the HTTP layer
///
/// # Example
///
/// ```rust
/// use crud_recipe::lifecycle::{ServiceConfig, ServiceSystem};
/// use crud_recipe::model::BookQuery;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = ServiceSystem::new(&ServiceConfig::default())?;
///
///     let books = system.book_client.books(BookQuery::default()).await?;
///     assert_eq!(books.len(), 6);
///
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct ServiceSystem {
    /// Client for the in-memory book catalogue
    pub book_client: BookClient,

    /// Client for the owner-scoped todo store
    pub todo_client: TodoClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ServiceSystem {
    /// Creates both actors from `config` and spawns them.
    ///
    /// Fails when the todo snapshot exists but cannot be read.
    pub fn new(config: &ServiceConfig) -> Result<Self, StorageError> {
        let capacity = config.channel_capacity;

        let book_table = if config.seed_books {
            book_actor::seeded_table()?
        } else {
            Table::in_memory()
        };
        let (book_actor, book_client) = book_actor::new(capacity, book_table);
        let book_handle = tokio::spawn(book_actor.run(()));

        let todo_table = todo_actor::open_table(config.todo_store.as_deref())?;
        let (todo_actor, todo_client) = todo_actor::new(capacity, todo_table);
        let todo_handle = tokio::spawn(todo_actor.run(()));

        Ok(Self {
            book_client,
            todo_client,
            handles: vec![book_handle, todo_handle],
        })
    }

    /// The HTTP application over this system's clients.
    ///
    /// The router holds client clones; drop it before calling [`ServiceSystem::shutdown`].
    pub fn router(&self, auth: Arc<dyn Authenticator>) -> axum::Router {
        http::router(AppState {
            books: self.book_client.clone(),
            todos: self.todo_client.clone(),
            auth,
        })
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes the actors' channels; each actor drains its queue and
    /// exits. Returns an error if an actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.book_client);
        drop(self.todo_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

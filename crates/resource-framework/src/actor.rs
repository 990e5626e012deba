//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the core component that manages the lifecycle
//! and state of entities. It implements the "Server" side of the Actor Model, processing
//! messages sequentially and ensuring exclusive access to the entity table.

use crate::access::Filter;
use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::session::Table;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the [`Table`] and the receiver
/// end of the channel. It is the single writer of its table: requests are handled one at a
/// time, so the table needs no `Mutex` or `RwLock`.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` (or `with_table()`) to get the `actor` and `client`.
/// 2.  **Wire**: Pass dependencies into `actor.run(context)`.
/// 3.  **Run**: Spawn the actor's run loop in a background task.
///
/// ```rust
/// use resource_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Debug, Serialize, Deserialize)]
/// struct Tag { id: u32, label: String }
/// #[derive(Debug, thiserror::Error)] #[error("tag error")] struct TagError;
///
/// #[async_trait]
/// impl ActorEntity for Tag {
///     type Id = u32;
///     type Create = String;
///     type Patch = Option<String>;
///     type Context = ();
///     type Error = TagError;
///
///     fn id(&self) -> u32 { self.id }
///     fn from_create_params(id: u32, label: String) -> Result<Self, Self::Error> {
///         Ok(Self { id, label })
///     }
///     async fn on_update(&mut self, patch: Option<String>, _: &()) -> Result<(), Self::Error> {
///         if let Some(label) = patch { self.label = label; }
///         Ok(())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Tag>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let tag = client.create("rust".to_string()).await.unwrap();
///     assert_eq!(tag.id, 1);
/// }
/// ```
///
/// ## Operations
///
/// Every request opens a [`Session`](crate::Session) on the table. Mutations commit it;
/// any early return drops it and discards what was staged.
///
/// * **Create**: allocate id → `from_create_params` → `on_create` → add → commit.
/// * **Get**: look up by id, return it when the scope matches.
/// * **List**: all rows the filter matches, in insertion order.
/// * **Update**: locate within scope → `on_update` on a copy → add (replace) → commit.
/// * **Delete**: locate within scope → `on_delete` → delete → commit.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    table: Table<T>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` over an empty in-memory table, and its client.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        Self::with_table(buffer_size, Table::in_memory())
    }

    /// Creates a new `ResourceActor` over an existing table (seeded or file-backed).
    pub fn with_table(buffer_size: usize, table: Table<T>) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, table };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook. This allows entities
    /// to access external dependencies (like other clients) that were created *after*
    /// the actor was instantiated but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Book" instead of "crud_recipe::model::book::Book")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.table.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params, &context).await;
                    match &result {
                        Ok(item) => {
                            info!(entity_type, id = %item.id(), size = self.table.len(), "Created")
                        }
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get {
                    id,
                    scope,
                    respond_to,
                } => {
                    let session = self.table.session();
                    let item = session.find(id).filter(|item| scope.matches(item)).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { filter, respond_to } => {
                    let session = self.table.session();
                    let items: Vec<T> = session
                        .query()
                        .filter(|item| filter.matches(item))
                        .cloned()
                        .collect();
                    debug!(entity_type, matched = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    id,
                    patch,
                    scope,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?patch, "Update");
                    let result = self.update(id, patch, &scope, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Updated"),
                        Err(FrameworkError::NotFound(_)) => warn!(entity_type, %id, "Not found"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Update failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete {
                    id,
                    scope,
                    respond_to,
                } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.delete(id, &scope, &context).await;
                    match &result {
                        Ok(()) => info!(entity_type, %id, size = self.table.len(), "Deleted"),
                        Err(FrameworkError::NotFound(_)) => warn!(entity_type, %id, "Not found"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Delete failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.table.len(), "Shutdown");
    }

    async fn create(
        &mut self,
        params: T::Create,
        context: &T::Context,
    ) -> Result<T, FrameworkError> {
        let mut session = self.table.session();
        let id = session.allocate_id()?;

        let mut item = T::from_create_params(id, params).map_err(entity_error)?;
        item.on_create(context).await.map_err(entity_error)?;

        session.add(item.clone());
        session.commit()?;
        Ok(item)
    }

    async fn update(
        &mut self,
        id: T::Id,
        patch: T::Patch,
        scope: &Filter<T>,
        context: &T::Context,
    ) -> Result<T, FrameworkError> {
        let mut session = self.table.session();
        let mut item = session
            .find(id)
            .filter(|item| scope.matches(item))
            .cloned()
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;

        item.on_update(patch, context).await.map_err(entity_error)?;
        debug_assert!(item.id() == id, "on_update must not change the id");

        session.add(item.clone());
        session.commit()?;
        Ok(item)
    }

    async fn delete(
        &mut self,
        id: T::Id,
        scope: &Filter<T>,
        context: &T::Context,
    ) -> Result<(), FrameworkError> {
        let mut session = self.table.session();
        let item = session
            .find(id)
            .filter(|item| scope.matches(item))
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;

        item.on_delete(context).await.map_err(entity_error)?;

        session.delete(id);
        session.commit()?;
        Ok(())
    }
}

fn entity_error<E: std::error::Error + Send + Sync + 'static>(e: E) -> FrameworkError {
    FrameworkError::EntityError(Box::new(e))
}

//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every resource (Book, Todo, …) must
//! implement to be managed by the generic `ResourceActor`. It names the id type, the create
//! and patch DTOs, the runtime context and the error type, and provides the lifecycle hooks
//! (`on_create`, `on_update`, `on_delete`).
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! Both default to `Ok(())`. [`ActorEntity::on_update`] has no default: it is where an
//! entity merges a sparse patch into itself, and every entity decides which fields a patch
//! may touch.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Identifiers
/// Ids are allocated by the actor from a monotonic counter, so `Id` converts both ways
/// with `u32`. Rows are kept ordered by id, which is also their insertion order.
///
/// # Persistence
/// Entities are `Serialize + DeserializeOwned` so a [`Table`](crate::Table) can snapshot
/// them to disk.
#[async_trait]
pub trait ActorEntity: Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Copy
        + Eq
        + Ord
        + Hash
        + Send
        + Sync
        + Display
        + Debug
        + From<u32>
        + Into<u32>;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// A sparse patch applied by [`ActorEntity::on_update`].
    type Patch: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The id this entity is stored under.
    fn id(&self) -> Self::Id;

    /// Construct the full Entity from the allocated ID and the payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed and before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Merge a sparse patch into this entity.
    ///
    /// Only fields present in the patch may change; the id never does.
    async fn on_update(
        &mut self,
        patch: Self::Patch,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}

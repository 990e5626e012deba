//! # ActorClient Trait
//!
//! Provides a common interface for resource‑specific clients, adding default `get`, `list`
//! and `delete` methods built on top of a generic `ResourceClient` and an access policy.
use crate::{AccessPolicy, ActorEntity, Filter, FrameworkError, Principal, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard read and delete operations.
///
/// Every provided method asks [`ActorClient::policy`] for the caller's scope first, so an
/// unauthorized caller is refused before the actor is consulted.
///
/// # Example
///
/// ```rust
/// use resource_framework::{ActorClient, ActorEntity, FrameworkError, Public, ResourceClient};
/// use async_trait::async_trait;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Debug, Serialize, Deserialize)]
/// struct Tag { id: u32 }
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct TagError(String);
///
/// impl From<String> for TagError {
///     fn from(s: String) -> Self { TagError(s) }
/// }
///
/// #[async_trait]
/// impl ActorEntity for Tag {
///     type Id = u32; type Create = (); type Patch = (); type Context = (); type Error = TagError;
///     fn id(&self) -> u32 { self.id }
///     fn from_create_params(id: u32, _: ()) -> Result<Self, Self::Error> { Ok(Self { id }) }
///     async fn on_update(&mut self, _: (), _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// struct TagClient {
///     inner: ResourceClient<Tag>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Tag> for TagClient {
///     type Error = TagError;
///     type Policy = Public;
///
///     fn inner(&self) -> &ResourceClient<Tag> { &self.inner }
///     fn policy(&self) -> &Public { &Public }
///     fn map_error(e: FrameworkError) -> Self::Error { TagError(e.to_string()) }
/// }
///
/// async fn usage(client: TagClient) {
///     // get(), list() and delete() are provided automatically!
///     let _ = client.get(None, 1).await;
///     let _ = client.delete(None, 1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Who may see which rows.
    type Policy: AccessPolicy<T>;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    fn policy(&self) -> &Self::Policy;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID. Rows outside the caller's scope are `NotFound`.
    #[tracing::instrument(skip(self))]
    async fn get(&self, principal: Option<&Principal>, id: T::Id) -> Result<T, Self::Error> {
        let scope = self.policy().scope(principal).map_err(Self::map_error)?;
        tracing::debug!("Sending request");
        self.inner()
            .get_in(scope, id)
            .await
            .map_err(Self::map_error)?
            .ok_or_else(|| Self::map_error(FrameworkError::NotFound(id.to_string())))
    }

    /// Every entity in the caller's scope that also matches `filter`.
    #[tracing::instrument(skip(self, filter))]
    async fn list(
        &self,
        principal: Option<&Principal>,
        filter: Filter<T>,
    ) -> Result<Vec<T>, Self::Error> {
        let scope = self.policy().scope(principal).map_err(Self::map_error)?;
        tracing::debug!("Sending request");
        self.inner()
            .list(scope.and(filter))
            .await
            .map_err(Self::map_error)
    }

    /// Delete an entity by ID. Rows outside the caller's scope are `NotFound`.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, principal: Option<&Principal>, id: T::Id) -> Result<(), Self::Error> {
        let scope = self.policy().scope(principal).map_err(Self::map_error)?;
        tracing::debug!("Sending request");
        self.inner()
            .delete_in(scope, id)
            .await
            .map_err(Self::map_error)
    }
}

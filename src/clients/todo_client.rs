//! # Todo Client
//!
//! Provides a high‑level API for interacting with the `Todo` actor.
//!
//! Every call names the acting principal. Owner routes go through [`OwnerOnly`]; the
//! `admin_*` routes go through [`AdminOnly`]. In both cases the policy is consulted
//! before any payload or id is looked at, so a caller without access learns nothing about
//! which todos exist.
use crate::model::validation::positive_id;
use crate::model::{NewTodo, Todo, TodoCreate, TodoId, TodoPatch};
use crate::todo_actor::TodoError;
use async_trait::async_trait;
use resource_framework::{
    AccessPolicy, ActorClient, AdminOnly, Filter, FrameworkError, OwnerOnly, Principal,
    ResourceClient,
};
use tracing::{debug, instrument};

/// Client for interacting with the Todo actor.
#[derive(Clone)]
pub struct TodoClient {
    inner: ResourceClient<Todo>,
}

impl TodoClient {
    pub fn new(inner: ResourceClient<Todo>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Todo> for TodoClient {
    type Error = TodoError;
    type Policy = OwnerOnly;

    fn inner(&self) -> &ResourceClient<Todo> {
        &self.inner
    }

    fn policy(&self) -> &OwnerOnly {
        &OwnerOnly
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => TodoError::NotFound(id),
            FrameworkError::Unauthorized(reason) => TodoError::Unauthorized(reason),
            FrameworkError::Storage(e) => TodoError::Storage(e.to_string()),
            other => TodoError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl TodoClient {
    fn owner_scope(&self, principal: Option<&Principal>) -> Result<Filter<Todo>, TodoError> {
        self.policy().scope(principal).map_err(Self::map_error)
    }

    fn admin_scope(principal: Option<&Principal>) -> Result<Filter<Todo>, TodoError> {
        AdminOnly.scope(principal).map_err(Self::map_error)
    }

    /// Store a new todo owned by `principal`.
    #[instrument(skip(self))]
    pub async fn create_todo(
        &self,
        principal: Option<&Principal>,
        params: TodoCreate,
    ) -> Result<Todo, TodoError> {
        let owner_id = principal
            .map(|p| p.id)
            .ok_or_else(|| TodoError::Unauthorized("Could not validate user".to_string()))?;
        params.validate()?;
        debug!("Sending request");
        self.inner
            .create(NewTodo {
                owner_id,
                todo: params,
            })
            .await
            .map_err(Self::map_error)
    }

    /// Every todo `principal` owns.
    pub async fn todos(&self, principal: Option<&Principal>) -> Result<Vec<Todo>, TodoError> {
        self.list(principal, Filter::all()).await
    }

    #[instrument(skip(self))]
    pub async fn todo(&self, principal: Option<&Principal>, id: TodoId) -> Result<Todo, TodoError> {
        let scope = self.owner_scope(principal)?;
        positive_id("todo_id", id)?;
        debug!("Sending request");
        self.inner
            .get_in(scope, id)
            .await
            .map_err(Self::map_error)?
            .ok_or_else(|| TodoError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn update_todo(
        &self,
        principal: Option<&Principal>,
        id: TodoId,
        patch: TodoPatch,
    ) -> Result<Todo, TodoError> {
        let scope = self.owner_scope(principal)?;
        positive_id("todo_id", id)?;
        patch.validate()?;
        debug!("Sending request");
        self.inner
            .update_in(scope, id, patch)
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn delete_todo(
        &self,
        principal: Option<&Principal>,
        id: TodoId,
    ) -> Result<(), TodoError> {
        let scope = self.owner_scope(principal)?;
        positive_id("todo_id", id)?;
        debug!("Sending request");
        self.inner.delete_in(scope, id).await.map_err(Self::map_error)
    }

    /// Every todo of every owner. Admins only.
    #[instrument(skip(self))]
    pub async fn admin_todos(&self, principal: Option<&Principal>) -> Result<Vec<Todo>, TodoError> {
        let scope = Self::admin_scope(principal)?;
        debug!("Sending request");
        self.inner.list(scope).await.map_err(Self::map_error)
    }

    /// Delete any todo. Admins only; a non-admin is refused even when `id` does not exist.
    #[instrument(skip(self))]
    pub async fn admin_delete(
        &self,
        principal: Option<&Principal>,
        id: TodoId,
    ) -> Result<(), TodoError> {
        let scope = Self::admin_scope(principal)?;
        positive_id("todo_id", id)?;
        debug!("Sending request");
        self.inner.delete_in(scope, id).await.map_err(Self::map_error)
    }
}

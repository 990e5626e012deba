//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::access::Filter;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # The CRUD Pattern
/// The variants map directly to **CRUD** operations plus a filtered `List`:
///
/// - **Create**: Uses [`ActorEntity::Create`] to initialize a new resource; answers with the
///   stored record.
/// - **Get (Read)**: Fetches the current state of the resource by ID.
/// - **List**: Every record the filter matches, in insertion order.
/// - **Update**: Merges an [`ActorEntity::Patch`] into an existing resource.
/// - **Delete**: Removes the resource.
///
/// # Scopes
/// `Get`, `Update` and `Delete` carry a `scope`. A row outside the scope is treated as
/// missing, which is how access policies hide rows the caller may not see.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        scope: Filter<T>,
        respond_to: Response<Option<T>>,
    },
    List {
        filter: Filter<T>,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        scope: Filter<T>,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        scope: Filter<T>,
        respond_to: Response<()>,
    },
}

//! # Resource Framework
//!
//! This crate provides the building blocks for small CRUD services over typed resources.
//! Each resource type is owned by one actor; every read and write goes through messages, so
//! the rows themselves never need a lock.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into four layers:
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - Your domain record and how a patch merges into it
//! 2. **Storage Layer** ([`Table`], [`Session`], [`IdAllocator`]) - Ordered rows, unit-of-work
//!    commits and optional JSON snapshots on disk
//! 3. **Runtime Layer** ([`ResourceActor`]) - Message processing and concurrency
//! 4. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - Type-safe communication,
//!    scoped by an [`AccessPolicy`]
//!
//! ## Core Abstractions
//!
//! ### [`ActorEntity`] - The Business Logic
//!
//! ```rust
//! use resource_framework::{ActorEntity, Patch, ResourceActor};
//! use async_trait::async_trait;
//! use serde::{Deserialize, Serialize};
//!
//! // 1. Define the Entity
//! #[derive(Clone, Debug, Serialize, Deserialize)]
//! struct Note {
//!     id: u32,
//!     text: String,
//!     pinned: bool,
//! }
//!
//! #[derive(Debug)] struct NoteCreate { text: String }
//! #[derive(Debug, Default, Deserialize)]
//! struct NotePatch {
//!     #[serde(default)] text: Patch<String>,
//!     #[serde(default)] pinned: Patch<bool>,
//! }
//! #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
//!
//! #[async_trait]
//! impl ActorEntity for Note {
//!     type Id = u32;
//!     type Create = NoteCreate;
//!     type Patch = NotePatch;
//!     type Context = ();
//!     type Error = NoteError;
//!
//!     fn id(&self) -> u32 { self.id }
//!
//!     fn from_create_params(id: u32, params: NoteCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, text: params.text, pinned: false })
//!     }
//!
//!     async fn on_update(&mut self, patch: NotePatch, _ctx: &()) -> Result<(), Self::Error> {
//!         patch.text.apply_to(&mut self.text);
//!         patch.pinned.apply_to(&mut self.pinned);
//!         Ok(())
//!     }
//! }
//!
//! // 2. Use the Actor
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Note>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let note = client.create(NoteCreate { text: "milk".into() }).await.unwrap();
//!     let patch: NotePatch = serde_json::from_str(r#"{"pinned": true}"#).unwrap();
//!     let note = client.update(note.id, patch).await.unwrap();
//!     assert_eq!(note.text, "milk");
//!     assert!(note.pinned);
//! }
//! ```
//!
//! ## Partial Updates
//!
//! A [`Patch<T>`] field distinguishes a key that was left out of the request body from one
//! sent as `null`. Only a present value is ever applied; [`Patch::apply_to`] leaves the
//! target untouched otherwise.
//!
//! ## Access Scopes
//!
//! An [`AccessPolicy`] turns the caller (`Option<&Principal>`) into a [`Filter`] or refuses
//! with [`FrameworkError::Unauthorized`]. The actor applies the filter before it looks at a
//! row, so a row the caller may not see is indistinguishable from a missing one.
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor
//! - A failed mutation rolls its session back; nothing half-applied is ever visible
//!
//! ## Testing
//!
//! The [`mock`] module hands out real `ResourceClient<T>` values answered from scripted
//! expectations, so client logic can be unit tested without spawning an actor.

pub mod access;
pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod ids;
pub mod message;
pub mod mock;
pub mod patch;
pub mod session;

// Re-export core types for convenience
pub use access::{AccessPolicy, AdminOnly, Filter, Owned, OwnerOnly, Principal, Public, Role};
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::{FrameworkError, StorageError};
pub use ids::IdAllocator;
pub use message::{ResourceRequest, Response};
pub use patch::Patch;
pub use session::{Session, Table};

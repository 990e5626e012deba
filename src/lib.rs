//! # CRUD Recipe
//!
//! > **Two small CRUD services on one resource-actor core.**
//!
//! - **Books**: a public, in-memory catalogue with filtered listing and sparse updates.
//! - **Todos**: per-user items behind bearer tokens, persisted to a JSON snapshot, with
//!   admin routes that see every owner.
//!
//! Both services are a [`ResourceActor`](resource_framework::ResourceActor) owning a
//! [`Table`](resource_framework::Table), wrapped in a domain client and exposed over axum.
//!
//! ## Module Tour
//!
//! ### 1. The Records ([`model`])
//! Plain data: [`Book`](model::Book), [`Todo`](model::Todo), their create and patch
//! payloads, and the field constraints checked before anything reaches an actor.
//!
//! ### 2. The Implementation ([`book_actor`], [`todo_actor`])
//! [`ActorEntity`](resource_framework::ActorEntity) implementations, per-actor error types
//! and factory functions.
//!
//! ### 3. The Interface ([`clients`])
//! [`BookClient`](clients::BookClient) and [`TodoClient`](clients::TodoClient) validate
//! payloads, apply the access policy of their service and map framework errors.
//!
//! ### 4. The Surface ([`http`])
//! Route table, bearer-token [`Caller`](http::Caller) extraction and `{"detail"}` error
//! bodies.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! Configuration, actor startup and graceful shutdown, tracing setup.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run -- --config service.toml
//! ```

pub mod book_actor;
pub mod clients;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod todo_actor;

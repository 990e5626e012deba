//! # System Lifecycle & Orchestration
//!
//! This module manages the runtime lifecycle of the services: reading configuration,
//! starting and wiring the store actors, and shutting them down cleanly.
//!
//! **Key Responsibilities:**
//! 1. **Configuration** - [`ServiceConfig`] from a TOML file, with defaults for every key
//! 2. **Actor Creation** - [`ServiceSystem::new`] builds one actor per store and spawns it
//! 3. **Graceful Shutdown** - [`ServiceSystem::shutdown`] closes the channels and awaits
//!    every actor
//! 4. **Observability Setup** - [`setup_tracing`]
//!
//! ## Startup Sequence
//!
//! ```rust,ignore
//! setup_tracing();
//! let config = ServiceConfig::load(path)?;
//! let system = ServiceSystem::new(&config)?;          // actors running
//! let app = system.router(Arc::new(TokenTable::from_grants(&config.tokens)));
//! axum::serve(listener, app).with_graceful_shutdown(ctrl_c).await?;
//! system.shutdown().await?;                           // actors drained
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - the server's router is dropped when `serve` returns, then
//!    `shutdown` drops the system's own clients
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Actors finish** - queued requests are processed and the final size is logged
//! 4. **Await completion** - `shutdown` waits for every actor task
//!
//! A file-backed todo store has nothing left to flush at this point: every mutation
//! committed its snapshot before it was acknowledged.

pub mod config;
pub mod system;
pub mod tracing;

pub use config::*;
pub use system::*;
pub use self::tracing::setup_tracing;

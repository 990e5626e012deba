//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//! Three layers emit events:
//!
//! - **HTTP**: `TraceLayer` opens one span per request (method, uri) and logs the response
//!   status and latency.
//! - **Clients**: every `BookClient`/`TodoClient` call is an `#[instrument]` span carrying
//!   its arguments. The span stays in the calling task; it does not follow the request
//!   into the actor.
//! - **Actors**: the store actor logs lifecycle and mutations with `entity_type`, `id` and
//!   the table `size`.
//!
//! ## Configuration
//!
//! The subscriber uses a compact format that hides the crate/module prefix
//! (`with_target(false)`); the actor lines carry `entity_type` instead.
//!
//! ```bash
//! # Lifecycle and mutations only
//! RUST_LOG=info cargo run
//!
//! # Full payloads and patches, plus reads
//! RUST_LOG=debug cargo run
//!
//! # Request spans from the HTTP layer as well
//! RUST_LOG=debug,tower_http=debug cargo run
//! ```
//!
//! ## Trace Example
//!
//! **With `RUST_LOG=info`**, a create followed by a partial update. The actors run in
//! their own tasks, so their lines carry no client span:
//!
//! ```text
//! INFO Actor started entity_type="Book" size=6
//! INFO Actor started entity_type="Todo" size=0
//! INFO Listening addr=127.0.0.1:8000
//! INFO Created entity_type="Book" id=7 size=7
//! INFO Updated entity_type="Book" id=7
//! ```
//!
//! **With `RUST_LOG=debug`** the client span shows up on the client's own line, and the
//! actor logs the patch it merged (long fields elided here):
//!
//! ```text
//! DEBUG update_book{update=BookUpdate { id: BookId(7), patch: BookPatch { .. } }}: Sending request
//! DEBUG Update entity_type="Book" id=7 patch=BookPatch { title: Value("Yes"), .. }
//! INFO Updated entity_type="Book" id=7
//! ```
//!
//! A refused or missing todo is logged at `warn` by the actor (`Not found`), or not at
//! all when the access policy refused the call before it was sent.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Module paths are noise; actors log entity_type instead
        .compact()
        .init();
}

//! # System Lifecycle & Orchestration
//!
//! Starts, wires and stops the storefront's actors.
//!
//! ## The StorefrontSystem Pattern
//!
//! ```rust,ignore
//! impl StorefrontSystem {
//!     pub async fn start(config: StorefrontConfig) -> Result<Self, SystemError> {
//!         // 1. Create actors (no dependencies yet)
//!         let (category_actor, category_client) = category_actor::new();
//!         let (product_actor, product_client) = product_actor::new();
//!
//!         // 2. Start actors with their dependencies injected
//!         let category_handle = tokio::spawn(category_actor.run(()));
//!         let product_handle = tokio::spawn(product_actor.run(category_client.clone()));
//!         // ...
//!     }
//! }
//! ```
//!
//! ## Dependency Injection via Context
//!
//! Actors are created without dependencies and receive them through `run(context)`.
//! The product actor gets a [`CategoryClient`](crate::clients::CategoryClient) so it
//! can refuse products that point at a missing category:
//!
//! ```rust,ignore
//! impl ActorEntity for Product {
//!     type Context = CategoryClient;
//! }
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the channels
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - wait for every actor task to finish
//!
//! The product actor holds a clone of the category client, so the category actor
//! stops only after the product actor has. The graph is acyclic, so shutdown
//! always completes.
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the global subscriber once per process:
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full payloads and mock requests
//! ```

pub mod storefront_system;
pub mod telemetry;

pub use storefront_system::*;
pub use telemetry::*;

//! # Storefront Framework
//!
//! Building blocks for the storefront's in-memory resources. Each resource (categories,
//! products, users, carts) lives in its own [`ResourceActor`], a Tokio task that owns an
//! insertion-ordered table and processes requests one at a time. Callers talk to it
//! through a cloneable [`ResourceClient`].
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]) - the domain type, its payloads and hooks
//! 2. **Runtime** ([`ResourceActor`]) - the table and the message loop
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]) - typed async calls
//!
//! ## Change notifications
//!
//! Every successful create, update, delete and mutating action is broadcast as a
//! [`ResourceEvent`]. [`ResourceClient::subscribe`] returns a receiver; dropping it
//! unsubscribes. The cart uses this to tell every view that shows it to re-render.
//!
//! ## Context injection
//!
//! Dependencies are passed to `run()`, not `new()`. The product actor is started with
//! the category client as its context, so it can reject a product whose category does
//! not exist:
//!
//! ```rust,ignore
//! let (category_actor, categories) = ResourceActor::<Category>::new(32);
//! let (product_actor, products) = ResourceActor::<Product>::new(32);
//!
//! tokio::spawn(category_actor.run(()));
//! tokio::spawn(product_actor.run(categories.clone()));
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed sequentially within an actor, so entity state needs no locks
//! - Different actors run in parallel
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a `ResourceClient` from scripted expectations, so logic
//! around a client can be tested without the actor behind it.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceEvent, ResourceRequest, Response};

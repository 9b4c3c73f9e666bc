//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every storefront resource (Category, Product,
//! User, Cart) implements to be kept in a [`ResourceActor`](crate::ResourceActor) table.
//! It names the id, the create/update payloads, the custom actions and the error type,
//! and it provides lifecycle hooks (`on_create`, `on_update`, `on_delete`,
//! `handle_action`) that the actor awaits while it owns the entity.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//! - [`ActorEntity::action_mutates`]
//! - [`ActorEntity::changed_since`]
//!
//! The defaults accept everything. Override them when a resource has to check a
//! reference (a product pointing at a category) or when an action only reads state.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by a `ResourceActor`.
///
/// # Async & Context
/// Hooks are `async` so they can call other actors. The `Context` associated type is
/// handed to `run()` rather than `new()`, which lets a product actor receive the
/// category client it validates against after both actors exist.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations (e.g. `Increment` on a cart).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected when the actor starts. `()` when there are none.
    type Context: Send + Sync;

    /// One error enum per resource, shared by every hook and action.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the id and payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after construction and before the entity is inserted.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    /// Whether `action` can change the entity.
    ///
    /// Subscribers only hear about actions for which this returns `true`.
    fn action_mutates(_action: &Self::Action) -> bool {
        true
    }

    /// Whether a mutating action left the entity different from `before`.
    ///
    /// Only asked after an action for which [`action_mutates`](Self::action_mutates)
    /// returned `true`; an `Updated` event goes out only when this does too.
    fn changed_since(&self, _before: &Self) -> bool {
        true
    }
}

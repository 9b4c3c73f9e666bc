//! # Cart Client
//!
//! The cart store API. Every call names the cart it works on; the storefront
//! session keeps one [`CartId`] for its lifetime.
use crate::cart_actor::{CartAction, CartActionResult, CartError};
use crate::model::{Cart, CartCreate, CartId, CartUpdate, Product, ProductId};
use async_trait::async_trait;
use storefront_framework::{ActorClient, FrameworkError, ResourceClient, ResourceEvent};
use tokio::sync::broadcast;
use tracing::{debug, instrument};

/// Client for interacting with the Cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
}

impl CartClient {
    pub fn new(inner: ResourceClient<Cart>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<Cart> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => CartError::NotFound(id),
            other => CartError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl CartClient {
    /// Opens a new, empty cart.
    #[instrument(skip(self))]
    pub async fn create_cart(&self) -> Result<CartId, CartError> {
        debug!("Sending request");
        self.inner.create(CartCreate).await.map_err(Self::map_error)
    }

    async fn quantity_action(&self, cart: CartId, action: CartAction) -> Result<u32, CartError> {
        match self.inner.perform_action(cart, action).await {
            Ok(CartActionResult::Quantity(quantity)) => Ok(quantity),
            Ok(other) => Err(CartError::ActorCommunicationError(format!(
                "Expected a quantity, got {other:?}"
            ))),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Adds the product with quantity 1; no-op when it is already in the cart.
    ///
    /// Returns the quantity after the call.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn add_item(&self, cart: CartId, product: Product) -> Result<u32, CartError> {
        debug!("Sending request");
        self.quantity_action(cart, CartAction::AddItem(product)).await
    }

    #[instrument(skip(self))]
    pub async fn increment(&self, cart: CartId, product: ProductId) -> Result<u32, CartError> {
        debug!("Sending request");
        self.quantity_action(cart, CartAction::Increment(product))
            .await
    }

    /// Removes one unit. The line disappears when the quantity reaches 0.
    #[instrument(skip(self))]
    pub async fn decrement(&self, cart: CartId, product: ProductId) -> Result<u32, CartError> {
        debug!("Sending request");
        self.quantity_action(cart, CartAction::Decrement(product))
            .await
    }

    /// Current quantity, 0 when the product is not in the cart.
    #[instrument(skip(self))]
    pub async fn quantity(&self, cart: CartId, product: ProductId) -> Result<u32, CartError> {
        self.quantity_action(cart, CartAction::Quantity(product))
            .await
    }

    #[instrument(skip(self))]
    pub async fn total(&self, cart: CartId) -> Result<f64, CartError> {
        match self.inner.perform_action(cart, CartAction::Total).await {
            Ok(CartActionResult::Total(total)) => Ok(total),
            Ok(other) => Err(CartError::ActorCommunicationError(format!(
                "Expected a total, got {other:?}"
            ))),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    #[instrument(skip(self))]
    pub async fn clear(&self, cart: CartId) -> Result<(), CartError> {
        debug!("Sending request");
        self.inner
            .update(cart, CartUpdate::Clear)
            .await
            .map(|_| ())
            .map_err(Self::map_error)
    }

    /// Change notifications for every cart. Dropping the receiver unsubscribes.
    pub fn subscribe(&self) -> broadcast::Receiver<ResourceEvent<Cart>> {
        self.inner.subscribe()
    }
}

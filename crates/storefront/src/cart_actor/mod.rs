//! # Cart Actor
//!
//! Holds the shopping carts. The storefront opens one cart per session; every
//! mutation is a single message processed to completion, and mutations that
//! actually change a cart (never reads) are broadcast to subscribers so each view
//! showing the cart can refresh.
//!
//! ## Usage
//!
//! ```rust
//! use storefront::cart_actor;
//! use storefront::model::{CategoryId, Product, ProductId};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, carts) = cart_actor::new();
//!     tokio::spawn(actor.run(()));
//!
//!     let cart = carts.create_cart().await?;
//!     let milk = Product::new(ProductId(1), "Milk", 5.0, CategoryId(1));
//!
//!     carts.add_item(cart, milk).await?;
//!     carts.increment(cart, ProductId(1)).await?;
//!     assert_eq!(carts.quantity(cart, ProductId(1)).await?, 2);
//!     assert_eq!(carts.total(cart).await?, 10.0);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::CartClient;
use crate::model::Cart;
use storefront_framework::ResourceActor;

/// Creates a new Cart actor and its client.
pub fn new() -> (ResourceActor<Cart>, CartClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    (actor, CartClient::new(generic_client))
}

//! # Category Actor
//!
//! Owns the category table. Categories have no dependencies and no custom
//! actions; the product actor holds a [`CategoryClient`] in its context and asks
//! this actor whether a product's category exists.
//!
//! ## Usage
//!
//! ```rust
//! use storefront::category_actor;
//! use storefront::model::CategoryCreate;
//! use storefront_framework::ActorClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = category_actor::new();
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client
//!         .create_category(CategoryCreate { name: "Dairy".into() })
//!         .await?;
//!     assert_eq!(client.list().await?[0].id, id);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CategoryClient;
use crate::model::Category;
use storefront_framework::ResourceActor;

/// Categories have no resource-specific operations.
#[derive(Debug, Clone)]
pub enum CategoryAction {}

/// Creates a new Category actor and its client.
pub fn new() -> (ResourceActor<Category>, CategoryClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    (actor, CategoryClient::new(generic_client))
}

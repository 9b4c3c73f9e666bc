//! # Product Actor
//!
//! Owns the product table. It depends on the category actor: the
//! [`CategoryClient`](crate::clients::CategoryClient) is injected through `run()`,
//! and every create or category change is rejected unless the category exists.
//!
//! ## Usage
//!
//! ```rust
//! use storefront::model::{CategoryCreate, ProductCreate};
//! use storefront::{category_actor, product_actor};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (category_actor, categories) = category_actor::new();
//!     let (product_actor, products) = product_actor::new();
//!
//!     tokio::spawn(category_actor.run(()));
//!     tokio::spawn(product_actor.run(categories.clone()));
//!
//!     let dairy = categories
//!         .create_category(CategoryCreate { name: "Dairy".into() })
//!         .await?;
//!     let params = ProductCreate {
//!         name: "Milk".to_string(),
//!         price: 5.0,
//!         category_id: dairy,
//!     };
//!     let milk = products.create_product(params).await?;
//!     assert_eq!(products.by_category(Some(dairy)).await?[0].id, milk);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ProductClient;
use crate::model::Product;
use storefront_framework::ResourceActor;

/// Products have no resource-specific operations beyond CRUD.
#[derive(Debug, Clone)]
pub enum ProductAction {}

/// Creates a new Product actor and its client.
pub fn new() -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    (actor, ProductClient::new(generic_client))
}

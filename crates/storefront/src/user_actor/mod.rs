//! # User Actor
//!
//! Manages user accounts. Users have no dependencies; the only custom actions
//! toggle the admin flag, which decides whether the account view offers editing.
//!
//! ## Usage
//!
//! ```rust
//! use storefront::user_actor;
//! use storefront::model::UserCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = user_actor::new();
//!     tokio::spawn(actor.run(()));
//!
//!     let params = UserCreate {
//!         name: "Irene".to_string(),
//!         is_admin: false,
//!     };
//!     let id = client.create_user(params).await?;
//!     assert!(client.promote_to_admin(id).await?);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::UserClient;
use crate::model::User;
use storefront_framework::ResourceActor;

/// Creates a new User actor and its client.
pub fn new() -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    (actor, UserClient::new(generic_client))
}

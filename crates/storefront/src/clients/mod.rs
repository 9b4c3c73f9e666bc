//! Type-safe wrappers around [`ResourceClient`](storefront_framework::ResourceClient).
//!
//! Each client implements [`ActorClient`](storefront_framework::ActorClient) for
//! `get`, `list` and `delete`, maps framework errors into its resource error, and
//! adds the resource-specific calls.

pub mod cart_client;
pub mod category_client;
pub mod product_client;
pub mod user_client;

pub use cart_client::*;
pub use category_client::*;
pub use product_client::*;
pub use user_client::*;

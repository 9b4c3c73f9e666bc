//! Plain data types for the storefront resources.
//!
//! Products, categories and users are what the API serves (JSON, camelCase keys).
//! The cart only lives in memory for the session.

pub mod cart;
pub mod category;
pub mod product;
pub mod user;

pub use cart::*;
pub use category::*;
pub use product::*;
pub use user::*;

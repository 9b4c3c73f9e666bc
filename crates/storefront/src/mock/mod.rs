//! # Mock Data Layer
//!
//! An in-memory relational store ([`MockDb`]) with record factories, and a
//! [`MockServer`] transport that serves the storefront endpoints from it. Views and
//! fetch wrappers run against the mock server exactly as they would against HTTP.
//!
//! ```rust
//! use storefront::lifecycle::StorefrontSystem;
//! use storefront::StorefrontConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let system = StorefrontSystem::start(StorefrontConfig::default()).await?;
//!     let db = system.mock_db();
//!
//!     let dairy = db.create_category_named("Dairy").await?;
//!     let product = db.create_product(Some(&dairy)).await?;
//!     assert_eq!(db.category_of(&product).await?, Some(dairy));
//!     Ok(())
//! }
//! ```

pub mod db;
pub mod fixtures;
pub mod server;

pub use db::*;
pub use fixtures::*;
pub use server::*;

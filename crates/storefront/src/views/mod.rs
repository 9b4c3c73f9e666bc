//! # Presentation View-Models
//!
//! Each view is built from data or query state and renders to plain text through
//! `Display` (or an async `render` when it has to ask the cart). Views hold no
//! layout or styling; they decide *what* is shown in each state.
//!
//! The query constructors below are the ones the pages use:
//!
//! ```rust
//! use std::time::Duration;
//!
//! use storefront::lifecycle::StorefrontSystem;
//! use storefront::query::QueryConfig;
//! use storefront::views::{products_query, ProductList};
//! use storefront::StorefrontConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let system = StorefrontSystem::start(StorefrontConfig::default()).await?;
//!     let server = system.mock_server();
//!     server.simulate_delay("/products", Duration::from_millis(200));
//!     let api = system.api(server);
//!
//!     let mut query = products_query(&api, QueryConfig::no_retry());
//!     assert_eq!(ProductList::new(query.state()).to_string(), "Loading...");
//!
//!     let list = ProductList::new(query.settled().await);
//!     assert_eq!(list.to_string(), "No products available.");
//!     Ok(())
//! }
//! ```

pub mod browse;
pub mod category_list;
pub mod product_detail;
pub mod product_form;
pub mod product_list;
pub mod users;
pub mod widgets;

pub use browse::*;
pub use category_list::*;
pub use product_detail::*;
pub use product_form::*;
pub use product_list::*;
pub use users::*;
pub use widgets::*;

use crate::api::StorefrontApi;
use crate::model::{Category, Product};
use crate::query::{Query, QueryConfig};

/// Shown by list views while their query is pending.
pub const LOADING: &str = "Loading...";

/// Starts the `products` query.
pub fn products_query(api: &StorefrontApi, config: QueryConfig) -> Query<Vec<Product>> {
    let api = api.clone();
    Query::start("products", config, move || {
        let api = api.clone();
        async move { api.products().await }
    })
}

/// Starts the `categories` query.
pub fn categories_query(api: &StorefrontApi, config: QueryConfig) -> Query<Vec<Category>> {
    let api = api.clone();
    Query::start("categories", config, move || {
        let api = api.clone();
        async move { api.categories().await }
    })
}

/// Formats a price the way every view shows it.
pub fn format_price(price: f64) -> String {
    format!("${price}")
}

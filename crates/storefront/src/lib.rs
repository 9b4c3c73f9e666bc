//! # Storefront
//!
//! A headless storefront: product browsing and category filtering, a session
//! shopping cart, validated product forms and translated labels.
//!
//! - **[model]**: Entities ([`Product`](model::Product), [`Category`](model::Category),
//!   [`User`](model::User), [`Cart`](model::Cart)) and their create/update payloads.
//! - **Actors**: one resource actor per entity ([`cart_actor`], [`category_actor`],
//!   [`product_actor`], [`user_actor`]), reached through the typed [`clients`].
//! - **[validation]**: Schema-driven form checks.
//! - **[api]** and **[query]**: Fetch wrappers over a [`Transport`](api::Transport) and
//!   the per-key loading state machine.
//! - **[mock]**: In-memory tables and a mock server for tests and the demo.
//! - **[views]**: Text view-models for every page and widget.
//! - **[lifecycle]**: Starts and stops the whole system.

pub mod api;
pub mod cart_actor;
pub mod category_actor;
pub mod clients;
pub mod config;
pub mod i18n;
pub mod lifecycle;
pub mod mock;
pub mod model;
pub mod notifications;
pub mod product_actor;
pub mod query;
pub mod user_actor;
pub mod validation;
pub mod views;

pub use config::{ConfigError, StorefrontConfig};

/// Represents a product in the catalog.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](storefront_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](storefront_framework::ResourceActor).
///
/// See [`impl ActorEntity for Product`](#impl-ActorEntity-for-Product) for details on:
/// - Creation parameters ([`ProductCreate`](crate::model::ProductCreate))
/// - Update parameters ([`ProductUpdate`](crate::model::ProductUpdate))
use serde::{Deserialize, Serialize};

use std::fmt::Display;

use super::CategoryId;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl ProductId {
    /// Checks an id that came from outside (a route segment, a form).
    ///
    /// Returns `None` for zero, negative values and values that do not fit.
    pub fn new(raw: i64) -> Option<Self> {
        u32::try_from(raw).ok().filter(|id| *id > 0).map(Self)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub category_id: CategoryId,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (typically set by the actor system)
    /// * `name` - Product name
    /// * `price` - Unit price
    /// * `category_id` - The category this product is listed under
    pub fn new(id: ProductId, name: impl Into<String>, price: f64, category_id: CategoryId) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category_id,
        }
    }
}

/// Payload for creating a product. This is also the POST/PUT body: a product without its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
    pub category_id: CategoryId,
}

impl From<&Product> for ProductCreate {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price,
            category_id: product.category_id,
        }
    }
}

/// Partial update of a product. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category_id: Option<CategoryId>,
}

impl From<ProductCreate> for ProductUpdate {
    fn from(params: ProductCreate) -> Self {
        Self {
            name: Some(params.name),
            price: Some(params.price),
            category_id: Some(params.category_id),
        }
    }
}

//! # Product Client
//!
//! Provides a high-level API for interacting with the `Product` actor.
//! It wraps a `ResourceClient<Product>` and exposes domain-specific methods.
use crate::model::{CategoryId, Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::ProductError;
use async_trait::async_trait;
use storefront_framework::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    /// Entity errors are unwrapped back into the `ProductError` the actor raised.
    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<ProductError>() {
                Ok(err) => *err,
                Err(other) => ProductError::ActorCommunicationError(other.to_string()),
            },
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Products in one category, or every product for `None`. Insertion order is kept.
    #[instrument(skip(self))]
    pub async fn by_category(
        &self,
        category_id: Option<CategoryId>,
    ) -> Result<Vec<Product>, ProductError> {
        let products = self.list().await?;
        Ok(match category_id {
            Some(id) => products.into_iter().filter(|p| p.category_id == id).collect(),
            None => products,
        })
    }
}

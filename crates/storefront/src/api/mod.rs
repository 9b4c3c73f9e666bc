//! # Data Fetch Wrappers
//!
//! Typed calls for the storefront endpoints:
//!
//! | Call | Request |
//! |---|---|
//! | [`StorefrontApi::products`] | `GET /products` |
//! | [`StorefrontApi::product`] | `GET /products/:id` (`null` means not found) |
//! | [`StorefrontApi::categories`] | `GET /categories` |
//! | [`StorefrontApi::users`] | `GET /users` |
//! | [`StorefrontApi::create_product`] | `POST /products` |
//! | [`StorefrontApi::update_product`] | `PUT /products/:id` |
//!
//! Bodies that do not decode into the expected type count as transport errors.

pub mod error;
pub mod transport;

pub use error::*;
pub use transport::*;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::model::{Category, Product, ProductCreate, ProductId, User};

/// Typed client for the storefront endpoints over any [`Transport`].
#[derive(Clone)]
pub struct StorefrontApi {
    transport: Arc<dyn Transport>,
}

impl StorefrontApi {
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let body = self.transport.get(path).await?;
        Ok(serde_json::from_value(body).map_err(TransportError::from)?)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        payload: &impl Serialize,
    ) -> Result<T, FetchError> {
        let body = serde_json::to_value(payload).map_err(TransportError::from)?;
        let response = self.transport.send(method, path, body).await?;
        Ok(serde_json::from_value(response).map_err(TransportError::from)?)
    }

    /// All products. An empty list is a valid answer.
    #[instrument(skip(self))]
    pub async fn products(&self) -> Result<Vec<Product>, FetchError> {
        self.fetch("/products").await
    }

    /// One product by a raw, unchecked id.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for a non-positive id (no request is made), `NotFound` when
    /// the server answers `null`.
    #[instrument(skip(self))]
    pub async fn product(&self, raw_id: i64) -> Result<Product, FetchError> {
        let id = ProductId::new(raw_id)
            .ok_or_else(|| FetchError::InvalidInput("ProductId".to_string()))?;
        let product: Option<Product> = self.fetch(&format!("/products/{id}")).await?;
        debug!(found = product.is_some(), "Fetched product");
        product.ok_or_else(|| FetchError::NotFound("Product".to_string()))
    }

    #[instrument(skip(self))]
    pub async fn categories(&self) -> Result<Vec<Category>, FetchError> {
        self.fetch("/categories").await
    }

    #[instrument(skip(self))]
    pub async fn users(&self) -> Result<Vec<User>, FetchError> {
        self.fetch("/users").await
    }

    /// Stores a new product and returns it with its id.
    #[instrument(skip(self))]
    pub async fn create_product(&self, payload: &ProductCreate) -> Result<Product, FetchError> {
        self.send(HttpMethod::Post, "/products", payload).await
    }

    /// Replaces a stored product's fields.
    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        payload: &ProductCreate,
    ) -> Result<Product, FetchError> {
        self.send(HttpMethod::Put, &format!("/products/{id}"), payload)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Answers every GET with the same body and counts requests.
    struct CannedTransport {
        body: Value,
        requests: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Transport for CannedTransport {
        async fn get(&self, _path: &str) -> Result<Value, TransportError> {
            self.requests.fetch_add(1, Ordering::SeqCst);
            Ok(self.body.clone())
        }

        async fn send(
            &self,
            _method: HttpMethod,
            _path: &str,
            body: Value,
        ) -> Result<Value, TransportError> {
            self.requests.fetch_add(1, Ordering::SeqCst);
            Ok(body)
        }
    }

    fn api(body: Value) -> (StorefrontApi, Arc<AtomicUsize>) {
        let requests = Arc::new(AtomicUsize::new(0));
        let transport = CannedTransport {
            body,
            requests: requests.clone(),
        };
        (StorefrontApi::new(transport), requests)
    }

    #[tokio::test]
    async fn test_invalid_id_makes_no_request() {
        let (api, requests) = api(Value::Null);
        assert!(matches!(api.product(0).await, Err(FetchError::InvalidInput(_))));
        assert!(matches!(api.product(-1).await, Err(FetchError::InvalidInput(_))));
        assert_eq!(requests.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_null_product_is_not_found() {
        let (api, _) = api(Value::Null);
        let err = api.product(3).await.unwrap_err();
        assert!(matches!(err, FetchError::NotFound(_)));
        assert!(err.to_string().contains("not found"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_transport_error() {
        let (api, _) = api(json!({}));
        let err = api.product(3).await.unwrap_err();
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_empty_list_is_valid() {
        let (api, _) = api(json!([]));
        assert!(api.products().await.unwrap().is_empty());
    }
}

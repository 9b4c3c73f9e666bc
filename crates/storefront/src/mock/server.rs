//! A mock backend that answers storefront requests from [`MockDb`].
//!
//! Routes:
//!
//! - `GET /products`, `GET /products/:id` (`null` when missing)
//! - `GET /categories`, `GET /users`
//! - `POST /products`, `PUT /products/:id`
//!
//! Tests can replace a route's behaviour ([`MockServer::simulate_error`],
//! [`MockServer::simulate_delay`], [`MockServer::respond_with`]) and undo every
//! replacement with [`MockServer::reset_handlers`].

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use storefront_framework::ActorClient;
use tracing::{debug, warn};

use super::{MockDb, MockDbError};
use crate::api::{HttpMethod, Transport, TransportError};
use crate::category_actor::CategoryError;
use crate::model::{ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::ProductError;
use crate::validation::Violation;

/// What a replaced route does instead of its normal handler.
#[derive(Debug, Clone)]
pub enum RouteOverride {
    /// Fails like a dropped connection.
    Error,
    /// Waits, then answers normally.
    Delay(Duration),
    /// Answers with this body.
    Json(Value),
}

type RouteKey = (HttpMethod, String);

#[derive(Clone)]
pub struct MockServer {
    db: MockDb,
    overrides: Arc<Mutex<HashMap<RouteKey, RouteOverride>>>,
}

fn normalize(path: &str) -> String {
    let path = path.split('?').next().unwrap_or_default();
    format!("/{}", path.trim_matches('/'))
}

fn status_of(error: &MockDbError) -> u16 {
    match error {
        MockDbError::Product(ProductError::NotFound(_))
        | MockDbError::Category(CategoryError::NotFound(_)) => 404,
        MockDbError::Product(ProductError::Invalid(_) | ProductError::UnknownCategory(_)) => 400,
        _ => 500,
    }
}

impl MockServer {
    pub fn new(db: MockDb) -> Self {
        Self {
            db,
            overrides: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn db(&self) -> &MockDb {
        &self.db
    }

    fn overrides(&self) -> std::sync::MutexGuard<'_, HashMap<RouteKey, RouteOverride>> {
        self.overrides
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Replaces the behaviour of `method path` until [`reset_handlers`](Self::reset_handlers).
    pub fn override_route(&self, method: HttpMethod, path: &str, behaviour: RouteOverride) {
        debug!(%method, path, ?behaviour, "Route overridden");
        self.overrides()
            .insert((method, normalize(path)), behaviour);
    }

    /// Makes `GET path` fail with a network error.
    pub fn simulate_error(&self, path: &str) {
        self.override_route(HttpMethod::Get, path, RouteOverride::Error);
    }

    /// Makes `GET path` wait before answering.
    pub fn simulate_delay(&self, path: &str, delay: Duration) {
        self.override_route(HttpMethod::Get, path, RouteOverride::Delay(delay));
    }

    /// Makes `GET path` answer with `body`.
    pub fn respond_with(&self, path: &str, body: Value) {
        self.override_route(HttpMethod::Get, path, RouteOverride::Json(body));
    }

    /// Restores every route to its normal handler.
    pub fn reset_handlers(&self) {
        self.overrides().clear();
    }

    async fn handle(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, TransportError> {
        let path = normalize(path);
        debug!(%method, %path, "Mock request");

        let behaviour = self.overrides().get(&(method, path.clone())).cloned();
        match behaviour {
            Some(RouteOverride::Error) => {
                warn!(%method, %path, "Simulated network error");
                return Err(TransportError::Network("Network Error".to_string()));
            }
            Some(RouteOverride::Json(value)) => return Ok(value),
            Some(RouteOverride::Delay(delay)) => tokio::time::sleep(delay).await,
            None => {}
        }

        self.route(method, &path, body).await.map_err(|e| {
            warn!(%method, %path, error = %e, "Mock request failed");
            TransportError::Status {
                status: status_of(&e),
            }
        })
    }

    async fn route(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, MockDbError> {
        let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
        let products = self.db.products();

        let value = match (method, segments.as_slice()) {
            (HttpMethod::Get, ["products"]) => to_json(&products.list().await?)?,
            (HttpMethod::Get, ["products", id]) => {
                let product = match parse_id(id) {
                    Some(id) => products.get(id).await?,
                    None => None,
                };
                to_json(&product)?
            }
            (HttpMethod::Get, ["categories"]) => to_json(&self.db.categories().list().await?)?,
            (HttpMethod::Get, ["users"]) => to_json(&self.db.users().list().await?)?,
            (HttpMethod::Post, ["products"]) => {
                let params = payload(body)?;
                to_json(&self.db.create_product_with(params).await?)?
            }
            (HttpMethod::Put, ["products", id]) => {
                let id = parse_id(id).ok_or_else(|| ProductError::NotFound(id.to_string()))?;
                let update = ProductUpdate::from(payload(body)?);
                to_json(&products.update_product(id, update).await?)?
            }
            _ => return Err(ProductError::NotFound(path.to_string()).into()),
        };
        Ok(value)
    }
}

fn parse_id(raw: &str) -> Option<ProductId> {
    raw.parse::<i64>().ok().and_then(ProductId::new)
}

fn payload(body: Option<Value>) -> Result<ProductCreate, ProductError> {
    let body = body.unwrap_or(Value::Null);
    serde_json::from_value(body).map_err(|e| {
        ProductError::Invalid(Violation {
            field: "body",
            reason: e.to_string(),
        })
    })
}

fn to_json(value: &impl serde::Serialize) -> Result<Value, MockDbError> {
    Ok(serde_json::to_value(value)?)
}

#[async_trait]
impl Transport for MockServer {
    async fn get(&self, path: &str) -> Result<Value, TransportError> {
        self.handle(HttpMethod::Get, path, None).await
    }

    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        body: Value,
    ) -> Result<Value, TransportError> {
        self.handle(method, path, Some(body)).await
    }
}

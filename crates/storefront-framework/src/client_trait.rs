//! # ActorClient Trait
//!
//! Common interface for resource-specific clients. Implementors supply the inner
//! `ResourceClient` and an error mapping, and get `get`, `list` and `delete` for free.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard read/delete operations.
///
/// # Example
///
/// ```rust
/// use storefront_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Category { id: u32, name: String }
/// #[derive(Debug)] struct CategoryCreate { name: String }
/// #[derive(Debug)] struct CategoryUpdate;
/// #[derive(Debug)] enum CategoryAction {}
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("{0}")]
/// struct CategoryError(String);
///
/// impl From<String> for CategoryError {
///     fn from(s: String) -> Self { CategoryError(s) }
/// }
///
/// #[async_trait]
/// impl ActorEntity for Category {
///     type Id = u32;
///     type Create = CategoryCreate;
///     type Update = CategoryUpdate;
///     type Action = CategoryAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = CategoryError;
///
///     fn from_create_params(id: u32, p: CategoryCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, name: p.name })
///     }
///     async fn on_update(&mut self, _: CategoryUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, a: CategoryAction, _: &()) -> Result<(), Self::Error> { match a {} }
/// }
///
/// struct CategoryClient {
///     inner: ResourceClient<Category>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Category> for CategoryClient {
///     type Error = CategoryError;
///
///     fn inner(&self) -> &ResourceClient<Category> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         CategoryError(e.to_string())
///     }
/// }
///
/// async fn usage(client: CategoryClient) {
///     // get(), list() and delete() are provided.
///     let _ = client.list().await;
///     let _ = client.get(1).await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity, in insertion order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}

//! # Category Client
use crate::category_actor::CategoryError;
use crate::model::{Category, CategoryCreate, CategoryId};
use async_trait::async_trait;
use storefront_framework::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Category actor.
#[derive(Clone)]
pub struct CategoryClient {
    inner: ResourceClient<Category>,
}

impl CategoryClient {
    pub fn new(inner: ResourceClient<Category>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Category> for CategoryClient {
    type Error = CategoryError;

    fn inner(&self) -> &ResourceClient<Category> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => CategoryError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<CategoryError>() {
                Ok(err) => *err,
                Err(other) => CategoryError::ActorCommunicationError(other.to_string()),
            },
            other => CategoryError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl CategoryClient {
    #[instrument(skip(self))]
    pub async fn create_category(&self, params: CategoryCreate) -> Result<CategoryId, CategoryError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }
}

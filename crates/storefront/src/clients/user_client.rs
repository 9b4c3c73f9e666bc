use crate::model::{User, UserCreate, UserId, UserUpdate};
use crate::user_actor::{UserAction, UserError};
use async_trait::async_trait;
use storefront_framework::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => UserError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<UserError>() {
                Ok(err) => *err,
                Err(other) => UserError::ActorCommunicationError(other.to_string()),
            },
            other => UserError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl UserClient {
    #[instrument(skip(self))]
    pub async fn create_user(&self, params: UserCreate) -> Result<UserId, UserError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_user(&self, id: UserId, update: UserUpdate) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Grants admin rights. Returns the new admin flag.
    #[instrument(skip(self))]
    pub async fn promote_to_admin(&self, id: UserId) -> Result<bool, UserError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, UserAction::PromoteToAdmin)
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn revoke_admin(&self, id: UserId) -> Result<bool, UserError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, UserAction::RevokeAdmin)
            .await
            .map_err(Self::map_error)
    }
}

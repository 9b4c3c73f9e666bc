//! Entity trait implementation for the User domain type.

use async_trait::async_trait;
use storefront_framework::ActorEntity;

use super::{UserAction, UserError};
use crate::model::{User, UserCreate, UserId, UserUpdate};

fn checked_name(name: &str) -> Result<String, UserError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(UserError::ValidationError("Name is required".to_string()));
    }
    Ok(name.to_string())
}

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Action = UserAction;
    type ActionResult = bool;
    type Context = ();
    type Error = UserError;

    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, UserError> {
        Ok(Self {
            id,
            name: checked_name(&params.name)?,
            is_admin: params.is_admin,
        })
    }

    async fn on_update(&mut self, update: UserUpdate, _ctx: &()) -> Result<(), UserError> {
        if let Some(name) = update.name {
            self.name = checked_name(&name)?;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: UserAction, _ctx: &()) -> Result<bool, UserError> {
        self.is_admin = match action {
            UserAction::PromoteToAdmin => true,
            UserAction::RevokeAdmin => false,
        };
        Ok(self.is_admin)
    }
}

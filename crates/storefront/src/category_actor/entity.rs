//! Entity trait implementation for the Category domain type.

use async_trait::async_trait;
use storefront_framework::ActorEntity;

use super::{CategoryAction, CategoryError};
use crate::model::{Category, CategoryCreate, CategoryId, CategoryUpdate};

#[async_trait]
impl ActorEntity for Category {
    type Id = CategoryId;
    type Create = CategoryCreate;
    type Update = CategoryUpdate;
    type Action = CategoryAction;
    type ActionResult = ();
    type Context = ();
    type Error = CategoryError;

    /// Creates a new Category. The name is trimmed and must not be empty.
    fn from_create_params(id: CategoryId, params: CategoryCreate) -> Result<Self, CategoryError> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(CategoryError::MissingName);
        }
        Ok(Self {
            id,
            name: name.to_string(),
        })
    }

    async fn on_update(
        &mut self,
        update: CategoryUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), CategoryError> {
        if let Some(name) = update.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(CategoryError::MissingName);
            }
            self.name = name.to_string();
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CategoryAction,
        _ctx: &Self::Context,
    ) -> Result<(), CategoryError> {
        match action {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_trimmed_and_required() {
        let category = Category::from_create_params(
            CategoryId(1),
            CategoryCreate {
                name: "  Dairy ".into(),
            },
        )
        .unwrap();
        assert_eq!(category.name, "Dairy");

        let err = Category::from_create_params(CategoryId(2), CategoryCreate { name: " ".into() });
        assert_eq!(err.unwrap_err(), CategoryError::MissingName);
    }
}

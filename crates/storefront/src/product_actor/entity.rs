//! Entity trait implementation for the Product domain type.
//!
//! Products are checked twice: the name and price rules run synchronously in
//! `from_create_params`, and the category reference is resolved in the async hooks
//! by asking the category actor (the injected context).

use async_trait::async_trait;
use storefront_framework::{ActorClient, ActorEntity};

use super::{ProductAction, ProductError};
use crate::clients::CategoryClient;
use crate::model::{CategoryId, Product, ProductCreate, ProductId, ProductUpdate};
use crate::validation::check_product;

async fn ensure_category(categories: &CategoryClient, id: CategoryId) -> Result<(), ProductError> {
    match categories.get(id).await {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(ProductError::UnknownCategory(id)),
        Err(e) => Err(ProductError::ActorCommunicationError(e.to_string())),
    }
}

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ();
    type Context = CategoryClient;
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, ProductError> {
        check_product(&params)?;
        Ok(Self::new(
            id,
            params.name.trim(),
            params.price,
            params.category_id,
        ))
    }

    async fn on_create(&mut self, categories: &CategoryClient) -> Result<(), ProductError> {
        ensure_category(categories, self.category_id).await
    }

    /// Applies the changed fields, then re-checks the result as a whole.
    async fn on_update(
        &mut self,
        update: ProductUpdate,
        categories: &CategoryClient,
    ) -> Result<(), ProductError> {
        if let Some(name) = update.name {
            self.name = name.trim().to_string();
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        check_product(&ProductCreate::from(&*self))?;

        if let Some(category_id) = update.category_id {
            ensure_category(categories, category_id).await?;
            self.category_id = category_id;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &CategoryClient,
    ) -> Result<(), ProductError> {
        match action {}
    }
}

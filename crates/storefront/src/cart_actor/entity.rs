//! Entity trait implementation for the Cart domain type.

use async_trait::async_trait;
use storefront_framework::ActorEntity;

use super::{CartAction, CartActionResult, CartError};
use crate::model::{Cart, CartCreate, CartId, CartUpdate};

#[async_trait]
impl ActorEntity for Cart {
    type Id = CartId;
    type Create = CartCreate;
    type Update = CartUpdate;
    type Action = CartAction;
    type ActionResult = CartActionResult;
    type Context = ();
    type Error = CartError;

    fn from_create_params(id: CartId, _params: CartCreate) -> Result<Self, CartError> {
        Ok(Cart::new(id))
    }

    async fn on_update(&mut self, update: CartUpdate, _ctx: &()) -> Result<(), CartError> {
        match update {
            CartUpdate::Clear => self.clear(),
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CartAction,
        _ctx: &(),
    ) -> Result<CartActionResult, CartError> {
        let result = match action {
            CartAction::AddItem(product) => CartActionResult::Quantity(self.add_item(product)),
            CartAction::Increment(id) => CartActionResult::Quantity(self.increment(id)),
            CartAction::Decrement(id) => CartActionResult::Quantity(self.decrement(id)),
            CartAction::Quantity(id) => CartActionResult::Quantity(self.quantity(id)),
            CartAction::Total => CartActionResult::Total(self.total()),
        };
        Ok(result)
    }

    fn action_mutates(action: &CartAction) -> bool {
        action.is_mutation()
    }

    /// A repeated add or a step on a product that is not in the cart changes nothing.
    fn changed_since(&self, before: &Self) -> bool {
        self != before
    }
}

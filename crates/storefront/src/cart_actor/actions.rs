//! Custom actions for the Cart actor.
//!
//! These are the cart store operations. They are handled by
//! [`ActorEntity::handle_action`](storefront_framework::ActorEntity::handle_action),
//! which delegates to the pure methods on [`Cart`](crate::model::Cart).

use crate::model::{Product, ProductId};

#[derive(Debug, Clone)]
pub enum CartAction {
    /// Puts the product in the cart with quantity 1 unless it is already there.
    AddItem(Product),
    Increment(ProductId),
    /// Removes the line when the quantity would reach 0.
    Decrement(ProductId),
    /// Reads one quantity without changing anything.
    Quantity(ProductId),
    /// Reads the cart total without changing anything.
    Total,
}

impl CartAction {
    /// Whether subscribers should hear about this action.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            CartAction::AddItem(_) | CartAction::Increment(_) | CartAction::Decrement(_)
        )
    }
}

/// Results from CartActions.
#[derive(Debug, Clone, PartialEq)]
pub enum CartActionResult {
    /// The quantity after the action (0 when the product is not in the cart).
    Quantity(u32),
    Total(f64),
}

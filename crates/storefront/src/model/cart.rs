use indexmap::IndexMap;
use std::fmt::Display;

use super::{Product, ProductId};

/// Type-safe identifier for Carts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CartId(pub u32);

impl From<u32> for CartId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One line of the cart. `quantity` is never zero: the line is removed instead.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// `price * quantity` for this line.
    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

/// The session cart: line items keyed by product id, in the order they were added.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](storefront_framework::ActorEntity) trait.
/// The methods below are the pure state transitions; the cart actor applies them
/// one message at a time and broadcasts the result to subscribers.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub id: CartId,
    items: IndexMap<ProductId, CartItem>,
}

/// Payload for opening a new, empty cart.
#[derive(Debug, Clone, Default)]
pub struct CartCreate;

/// Whole-cart updates.
#[derive(Debug, Clone)]
pub enum CartUpdate {
    /// Removes every line.
    Clear,
}

impl Cart {
    pub fn new(id: CartId) -> Self {
        Self {
            id,
            items: IndexMap::new(),
        }
    }

    /// Adds `product` with quantity 1. A product already in the cart is left alone.
    ///
    /// Returns the quantity after the call.
    pub fn add_item(&mut self, product: Product) -> u32 {
        self.items
            .entry(product.id)
            .or_insert(CartItem {
                product,
                quantity: 1,
            })
            .quantity
    }

    /// Adds one unit. Unknown products are ignored and report 0.
    pub fn increment(&mut self, id: ProductId) -> u32 {
        match self.items.get_mut(&id) {
            Some(item) => {
                item.quantity += 1;
                item.quantity
            }
            None => 0,
        }
    }

    /// Removes one unit, dropping the line when it would reach 0.
    pub fn decrement(&mut self, id: ProductId) -> u32 {
        let Some(item) = self.items.get_mut(&id) else {
            return 0;
        };
        if item.quantity > 1 {
            item.quantity -= 1;
            return item.quantity;
        }
        self.items.shift_remove(&id);
        0
    }

    /// Current quantity, 0 when the product is not in the cart.
    pub fn quantity(&self, id: ProductId) -> u32 {
        self.items.get(&id).map_or(0, |item| item.quantity)
    }

    pub fn line_total(&self, id: ProductId) -> f64 {
        self.items.get(&id).map_or(0.0, CartItem::line_total)
    }

    /// Sum of every line total.
    pub fn total(&self) -> f64 {
        self.items.values().map(CartItem::line_total).sum()
    }

    pub fn items(&self) -> impl Iterator<Item = &CartItem> {
        self.items.values()
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.items.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

//! The browse page: a category filter above a product table whose rows carry a
//! quantity selector bound to the session cart.

use std::fmt::Display;

use tracing::{debug, instrument};

use super::{categories_query, format_price, products_query};
use crate::api::StorefrontApi;
use crate::cart_actor::CartError;
use crate::clients::CartClient;
use crate::model::{CartId, Category, CategoryId, Product};
use crate::query::{Query, QueryConfig, QueryState};

pub const SKELETON_ROWS: usize = 5;
pub const SKELETON_CELLS: usize = 3;
pub const LOADING_PRODUCT: &str = "loading product";
pub const LOADING_CATEGORIES: &str = "loading categories";
pub const ALL_CATEGORIES: &str = "All";

/// What a product row shows in its quantity column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityView {
    AddToCart,
    Controls { quantity: u32 },
}

impl QuantityView {
    pub fn from_quantity(quantity: u32) -> Self {
        match quantity {
            0 => QuantityView::AddToCart,
            quantity => QuantityView::Controls { quantity },
        }
    }

    pub fn quantity(&self) -> u32 {
        match self {
            QuantityView::AddToCart => 0,
            QuantityView::Controls { quantity } => *quantity,
        }
    }
}

impl Display for QuantityView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuantityView::AddToCart => f.write_str("Add to Cart"),
            QuantityView::Controls { quantity } => write!(f, "- {quantity} +"),
        }
    }
}

/// The cart controls for one product.
#[derive(Clone)]
pub struct QuantitySelector {
    cart: CartClient,
    cart_id: CartId,
    product: Product,
}

impl QuantitySelector {
    pub fn new(cart: CartClient, cart_id: CartId, product: Product) -> Self {
        Self {
            cart,
            cart_id,
            product,
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub async fn view(&self) -> Result<QuantityView, CartError> {
        let quantity = self.cart.quantity(self.cart_id, self.product.id).await?;
        Ok(QuantityView::from_quantity(quantity))
    }

    pub async fn add_to_cart(&self) -> Result<QuantityView, CartError> {
        let quantity = self
            .cart
            .add_item(self.cart_id, self.product.clone())
            .await?;
        Ok(QuantityView::from_quantity(quantity))
    }

    pub async fn increment(&self) -> Result<QuantityView, CartError> {
        let quantity = self.cart.increment(self.cart_id, self.product.id).await?;
        Ok(QuantityView::from_quantity(quantity))
    }

    pub async fn decrement(&self) -> Result<QuantityView, CartError> {
        let quantity = self.cart.decrement(self.cart_id, self.product.id).await?;
        Ok(QuantityView::from_quantity(quantity))
    }
}

pub struct BrowseProducts {
    categories: Query<Vec<Category>>,
    products: Query<Vec<Product>>,
    selected: Option<CategoryId>,
    cart: CartClient,
    cart_id: CartId,
}

impl BrowseProducts {
    /// Starts both queries; they settle independently.
    pub fn start(
        api: &StorefrontApi,
        config: QueryConfig,
        cart: CartClient,
        cart_id: CartId,
    ) -> Self {
        Self::from_queries(
            categories_query(api, config),
            products_query(api, config),
            cart,
            cart_id,
        )
    }

    pub fn from_queries(
        categories: Query<Vec<Category>>,
        products: Query<Vec<Product>>,
        cart: CartClient,
        cart_id: CartId,
    ) -> Self {
        Self {
            categories,
            products,
            selected: None,
            cart,
            cart_id,
        }
    }

    /// Waits for both queries to settle.
    pub async fn settled(&mut self) {
        self.categories.settled().await;
        self.products.settled().await;
    }

    /// Filters the table by `category`; `None` shows every product.
    pub fn select_category(&mut self, category: Option<CategoryId>) {
        debug!(?category, "Category selected");
        self.selected = category;
    }

    pub fn selected_category(&self) -> Option<CategoryId> {
        self.selected
    }

    /// The select's options as `(value, label)`, `None` while it is not shown.
    pub fn category_options(&self) -> Option<Vec<(String, String)>> {
        let categories = self.categories.state();
        let categories = categories.data()?;
        let mut options = vec![(String::new(), ALL_CATEGORIES.to_string())];
        options.extend(
            categories
                .iter()
                .map(|c| (c.id.to_string(), c.name.clone())),
        );
        Some(options)
    }

    /// Products that pass the current filter. Empty until the products load.
    pub fn visible_products(&self) -> Vec<Product> {
        match self.products.state() {
            QueryState::Success(products) => products
                .into_iter()
                .filter(|p| self.selected.is_none_or(|id| p.category_id == id))
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn quantity_selector(&self, product: Product) -> QuantitySelector {
        QuantitySelector::new(self.cart.clone(), self.cart_id, product)
    }

    #[instrument(skip(self))]
    pub async fn render(&self) -> Result<String, CartError> {
        let products = self.products.state();
        if let QueryState::Error(e) = &products {
            return Ok(format!("Error: {e}"));
        }

        let mut lines = vec!["Products".to_string()];

        match self.categories.state() {
            QueryState::Idle | QueryState::Loading => lines.push(LOADING_CATEGORIES.to_string()),
            QueryState::Error(_) => {}
            QueryState::Success(_) => {
                let selected = self.selected.map(|id| id.to_string()).unwrap_or_default();
                let options: Vec<String> = self
                    .category_options()
                    .unwrap_or_default()
                    .into_iter()
                    .map(|(value, label)| {
                        if value == selected {
                            format!("[{label}]")
                        } else {
                            label
                        }
                    })
                    .collect();
                lines.push(format!("Category: {}", options.join(" | ")));
            }
        }

        match products {
            QueryState::Idle | QueryState::Loading => {
                let row = vec![LOADING_PRODUCT; SKELETON_CELLS].join(" | ");
                lines.extend(std::iter::repeat_n(row, SKELETON_ROWS));
            }
            QueryState::Error(_) => {}
            QueryState::Success(_) => {
                lines.push("Name | Price | Quantity".to_string());
                for product in self.visible_products() {
                    let name = product.name.clone();
                    let price = format_price(product.price);
                    let quantity = self.quantity_selector(product).view().await?;
                    lines.push(format!("{name} | {price} | {quantity}"));
                }
            }
        }

        Ok(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_view() {
        assert_eq!(QuantityView::from_quantity(0).to_string(), "Add to Cart");
        assert_eq!(QuantityView::from_quantity(3).to_string(), "- 3 +");
        assert_eq!(QuantityView::from_quantity(3).quantity(), 3);
    }
}

use std::fmt::Display;

use super::LOADING;
use crate::model::Product;
use crate::query::QueryState;

pub const NO_PRODUCTS: &str = "No products available.";

/// The plain product list.
#[derive(Debug, Clone)]
pub struct ProductList {
    state: QueryState<Vec<Product>>,
}

impl ProductList {
    pub fn new(state: QueryState<Vec<Product>>) -> Self {
        Self { state }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, QueryState::Idle | QueryState::Loading)
    }
}

impl Display for ProductList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.state {
            QueryState::Idle | QueryState::Loading => f.write_str(LOADING),
            QueryState::Error(e) => write!(f, "Error: {e}"),
            QueryState::Success(products) if products.is_empty() => f.write_str(NO_PRODUCTS),
            QueryState::Success(products) => {
                let lines: Vec<String> = products.iter().map(|p| format!("- {}", p.name)).collect();
                f.write_str(&lines.join("\n"))
            }
        }
    }
}

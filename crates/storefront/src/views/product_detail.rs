use std::fmt::Display;

use super::{format_price, LOADING};
use crate::api::{FetchError, StorefrontApi};
use crate::model::Product;
use crate::query::{Query, QueryConfig, QueryState};

pub const PRODUCT_NOT_FOUND: &str = "The given product was not found.";

/// One product looked up by a raw route id.
#[derive(Debug, Clone)]
pub struct ProductDetail {
    state: QueryState<Product>,
}

impl ProductDetail {
    pub fn new(state: QueryState<Product>) -> Self {
        Self { state }
    }

    /// Starts the `product/:id` query for an unchecked id.
    pub fn query(api: &StorefrontApi, raw_id: i64, config: QueryConfig) -> Query<Product> {
        let api = api.clone();
        Query::start(&format!("product/{raw_id}"), config, move || {
            let api = api.clone();
            async move { api.product(raw_id).await }
        })
    }

    /// Fetches the product and builds the settled view.
    pub async fn load(api: &StorefrontApi, raw_id: i64, config: QueryConfig) -> Self {
        Self::new(Self::query(api, raw_id, config).settled().await)
    }

    pub fn product(&self) -> Option<&Product> {
        self.state.data()
    }
}

impl Display for ProductDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.state {
            QueryState::Idle | QueryState::Loading => f.write_str(LOADING),
            QueryState::Error(e) => match e.as_ref() {
                FetchError::InvalidInput(_) => write!(f, "{e}"),
                FetchError::NotFound(_) => f.write_str(PRODUCT_NOT_FOUND),
                FetchError::Transport(_) => write!(f, "Error: {e}"),
            },
            QueryState::Success(product) => {
                write!(f, "{}\n{}", product.name, format_price(product.price))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::TransportError;
    use crate::model::{CategoryId, ProductId};
    use std::sync::Arc;

    fn failed(error: FetchError) -> String {
        ProductDetail::new(QueryState::Error(Arc::new(error))).to_string()
    }

    #[test]
    fn test_each_error_kind_renders_its_own_message() {
        assert_eq!(failed(FetchError::InvalidInput("ProductId".into())), "Invalid ProductId");
        assert_eq!(failed(FetchError::NotFound("Product".into())), PRODUCT_NOT_FOUND);
        assert_eq!(
            failed(TransportError::Status { status: 500 }.into()),
            "Error: Request failed with status code 500"
        );
    }

    #[test]
    fn test_success_shows_name_and_price() {
        let product = Product::new(ProductId(4), "Cheese", 5.0, CategoryId(1));
        let view = ProductDetail::new(QueryState::Success(product));
        assert_eq!(view.to_string(), "Cheese\n$5");
        assert_eq!(view.product().map(|p| p.id), Some(ProductId(4)));
    }
}

//! The in-memory store behind the mock server.
//!
//! Three tables (categories, products, users), each owned by its resource actor.
//! Products reference categories: the product actor refuses a `categoryId` that
//! is not in the category table, so the store stays consistent.

use std::sync::{Arc, Mutex};

use storefront_framework::ActorClient;
use thiserror::Error;
use tracing::{debug, instrument};

use super::fixtures::{random_price, NameGenerator};
use crate::category_actor::CategoryError;
use crate::clients::{CategoryClient, ProductClient, UserClient};
use crate::model::{
    Category, CategoryCreate, CategoryId, Product, ProductCreate, ProductId, User, UserCreate,
};
use crate::product_actor::ProductError;
use crate::user_actor::UserError;

#[derive(Debug, Error)]
pub enum MockDbError {
    #[error(transparent)]
    Category(#[from] CategoryError),
    #[error(transparent)]
    Product(#[from] ProductError),
    #[error(transparent)]
    User(#[from] UserError),
    #[error("Failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Handle to the mock tables. Clones share the same tables and name generator.
#[derive(Clone)]
pub struct MockDb {
    categories: CategoryClient,
    products: ProductClient,
    users: UserClient,
    names: Arc<Mutex<NameGenerator>>,
}

impl MockDb {
    pub fn new(categories: CategoryClient, products: ProductClient, users: UserClient) -> Self {
        Self {
            categories,
            products,
            users,
            names: Arc::new(Mutex::new(NameGenerator::new())),
        }
    }

    pub fn categories(&self) -> &CategoryClient {
        &self.categories
    }

    pub fn products(&self) -> &ProductClient {
        &self.products
    }

    pub fn users(&self) -> &UserClient {
        &self.users
    }

    fn names(&self) -> std::sync::MutexGuard<'_, NameGenerator> {
        self.names.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    // --- Factories ---

    /// Creates a category with a generated, unique name.
    pub async fn create_category(&self) -> Result<Category, MockDbError> {
        let name = self.names().category_name();
        self.create_category_named(&name).await
    }

    #[instrument(skip(self))]
    pub async fn create_category_named(&self, name: &str) -> Result<Category, MockDbError> {
        let id = self
            .categories
            .create_category(CategoryCreate {
                name: name.to_string(),
            })
            .await?;
        let category = self
            .categories
            .get(id)
            .await?
            .ok_or_else(|| CategoryError::NotFound(id.to_string()))?;
        debug!(%id, name = %category.name, "Seeded category");
        Ok(category)
    }

    /// Creates a product with a unique name and a price in `1..=100`.
    ///
    /// Without a category, a fresh one is created for it.
    pub async fn create_product(&self, category: Option<&Category>) -> Result<Product, MockDbError> {
        let category_id = match category {
            Some(category) => category.id,
            None => self.create_category().await?.id,
        };
        let name = self.names().product_name();
        self.create_product_with(ProductCreate {
            name,
            price: random_price(),
            category_id,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn create_product_with(&self, params: ProductCreate) -> Result<Product, MockDbError> {
        let id = self.products.create_product(params).await?;
        let product = self
            .products
            .get(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))?;
        debug!(%id, name = %product.name, "Seeded product");
        Ok(product)
    }

    #[instrument(skip(self))]
    pub async fn create_user(&self, name: &str, is_admin: bool) -> Result<User, MockDbError> {
        let id = self
            .users
            .create_user(UserCreate {
                name: name.to_string(),
                is_admin,
            })
            .await?;
        let user = self
            .users
            .get(id)
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))?;
        Ok(user)
    }

    // --- Lookups ---

    /// Products in `category_id`, or all products for `None`.
    pub async fn products_by_category(
        &self,
        category_id: Option<CategoryId>,
    ) -> Result<Vec<Product>, MockDbError> {
        Ok(self.products.by_category(category_id).await?)
    }

    /// The category a product points at, `None` if it has been deleted since.
    pub async fn category_of(&self, product: &Product) -> Result<Option<Category>, MockDbError> {
        Ok(self.categories.get(product.category_id).await?)
    }

    // --- Cleanup ---

    /// Deletes the given categories. Ids that are already gone are skipped.
    pub async fn delete_categories(&self, ids: &[CategoryId]) -> Result<(), MockDbError> {
        for id in ids {
            match self.categories.delete(*id).await {
                Ok(()) | Err(CategoryError::NotFound(_)) => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    /// Deletes the given products. Ids that are already gone are skipped.
    pub async fn delete_products(&self, ids: &[ProductId]) -> Result<(), MockDbError> {
        for id in ids {
            match self.products.delete(*id).await {
                Ok(()) | Err(ProductError::NotFound(_)) => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}

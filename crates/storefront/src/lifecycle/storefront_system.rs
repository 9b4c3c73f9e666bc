use thiserror::Error;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info, instrument};
use url::Url;

use crate::api::{HttpTransport, StorefrontApi, Transport, TransportError};
use crate::cart_actor::CartError;
use crate::clients::{CartClient, CategoryClient, ProductClient, UserClient};
use crate::config::StorefrontConfig;
use crate::i18n::Translator;
use crate::mock::{MockDb, MockServer};
use crate::model::CartId;
use crate::notifications::Toaster;

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Failed to open the session cart: {0}")]
    Cart(#[from] CartError),
    #[error("Actor task failed: {0}")]
    ActorTask(#[from] JoinError),
}

/// The running storefront: every resource actor plus the session state shared
/// by the views (one cart, one toaster).
///
/// # Example
///
/// ```rust
/// use storefront::lifecycle::StorefrontSystem;
/// use storefront::StorefrontConfig;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = StorefrontSystem::start(StorefrontConfig::default()).await?;
///     assert_eq!(system.cart_client.total(system.cart_id).await?, 0.0);
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct StorefrontSystem {
    pub category_client: CategoryClient,
    pub product_client: ProductClient,
    pub user_client: UserClient,
    pub cart_client: CartClient,

    /// The session cart.
    pub cart_id: CartId,
    pub toaster: Toaster,
    pub config: StorefrontConfig,

    handles: Vec<JoinHandle<()>>,
}

impl StorefrontSystem {
    /// Spawns all actors and opens the session cart.
    #[instrument(skip(config))]
    pub async fn start(config: StorefrontConfig) -> Result<Self, SystemError> {
        // 1. Create actors (no dependencies)
        let (category_actor, category_client) = crate::category_actor::new();
        let (product_actor, product_client) = crate::product_actor::new();
        let (user_actor, user_client) = crate::user_actor::new();
        let (cart_actor, cart_client) = crate::cart_actor::new();

        // 2. Start actors with injected context
        let category_handle = tokio::spawn(category_actor.run(()));
        let product_handle = tokio::spawn(product_actor.run(category_client.clone()));
        let user_handle = tokio::spawn(user_actor.run(()));
        let cart_handle = tokio::spawn(cart_actor.run(()));

        let handles = vec![product_handle, category_handle, user_handle, cart_handle];

        let cart_id = match cart_client.create_cart().await {
            Ok(id) => id,
            Err(e) => {
                error!(error = %e, "Could not open the session cart");
                return Err(e.into());
            }
        };

        info!(%cart_id, language = %config.language, "Storefront started");
        Ok(Self {
            category_client,
            product_client,
            user_client,
            cart_client,
            cart_id,
            toaster: Toaster::new(),
            config,
            handles,
        })
    }

    /// The mock tables, backed by this system's actors.
    pub fn mock_db(&self) -> MockDb {
        MockDb::new(
            self.category_client.clone(),
            self.product_client.clone(),
            self.user_client.clone(),
        )
    }

    /// A mock server over [`mock_db`](Self::mock_db).
    pub fn mock_server(&self) -> MockServer {
        MockServer::new(self.mock_db())
    }

    /// The fetch wrappers over `transport`.
    pub fn api(&self, transport: impl Transport + 'static) -> StorefrontApi {
        StorefrontApi::new(transport)
    }

    /// The fetch wrappers over HTTP, against `config.api_url`.
    pub fn http_api(&self) -> Result<StorefrontApi, TransportError> {
        let base_url = Url::parse(&self.config.api_url)?;
        Ok(self.api(HttpTransport::new(base_url)?))
    }

    pub fn translator(&self) -> Translator {
        Translator::new(self.config.language)
    }

    /// Drops every client and waits for the actors to stop.
    ///
    /// Clones handed out earlier (a `MockDb`, a view) keep their actor alive, so
    /// drop them before calling this.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down storefront...");

        drop(self.cart_client);
        drop(self.user_client);
        drop(self.product_client);
        drop(self.category_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e.into());
            }
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}

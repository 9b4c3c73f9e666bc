//! # Storefront Demo
//!
//! Seeds the mock store, browses the catalogue through the mock server, filters
//! by category and fills the session cart, logging each step.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

use storefront::lifecycle::{setup_tracing, StorefrontSystem};
use storefront::views::BrowseProducts;
use storefront::StorefrontConfig;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = StorefrontConfig::from_env()?;
    info!(api_url = %config.api_url, "Starting storefront demo");
    let query_config = config.query;

    let system = StorefrontSystem::start(config).await?;
    let translator = system.translator();
    info!(greeting = translator.label("welcome")?, "Storefront ready");

    let db = system.mock_db();
    let (dairy, bakery) = async {
        let dairy = db.create_category_named("Dairy").await?;
        let bakery = db.create_category_named("Bakery").await?;
        for _ in 0..3 {
            db.create_product(Some(&dairy)).await?;
            db.create_product(Some(&bakery)).await?;
        }
        Ok::<_, storefront::mock::MockDbError>((dairy, bakery))
    }
    .instrument(tracing::info_span!("seeding"))
    .await?;
    info!(categories = 2, products = 6, "Mock store seeded");

    let api = system.api(system.mock_server());
    let mut page = BrowseProducts::start(
        &api,
        query_config,
        system.cart_client.clone(),
        system.cart_id,
    );
    let loading = page.render().await?;
    info!(page = %loading, "Browse page while loading");
    page.settled().await;
    let loaded = page.render().await?;
    info!(page = %loaded, "Browse page");

    page.select_category(Some(dairy.id));
    let dairy_products = page.visible_products();
    info!(category = %dairy.name, count = dairy_products.len(), "Filtered");

    for product in dairy_products {
        let selector = page.quantity_selector(product);
        selector.add_to_cart().await?;
        let view = selector.increment().await?;
        info!(product = %selector.product().name, quantity = %view, "Added to cart");
    }

    page.select_category(Some(bakery.id));
    if let Some(product) = page.visible_products().into_iter().next() {
        let selector = page.quantity_selector(product);
        selector.add_to_cart().await?;
        selector.decrement().await?;
        info!(product = %selector.product().name, "Added and removed again");
    }

    let total = system.cart_client.total(system.cart_id).await?;
    info!(total, "Cart total");

    drop(page);
    drop(api);
    drop(db);
    system.shutdown().await?;
    Ok(())
}

use std::time::Duration;

use serde_json::json;
use storefront::api::{FetchError, HttpMethod};
use storefront::lifecycle::StorefrontSystem;
use storefront::mock::RouteOverride;
use storefront::model::Category;
use storefront::query::QueryConfig;
use storefront::views::{
    products_query, BrowseProducts, CategoryList, ProductDetail, ProductList, QuantityView,
    LOADING_CATEGORIES, LOADING_PRODUCT, NO_PRODUCTS, PRODUCT_NOT_FOUND,
};
use storefront::StorefrontConfig;

async fn start() -> StorefrontSystem {
    StorefrontSystem::start(StorefrontConfig::default())
        .await
        .expect("Failed to start storefront")
}

fn browse(system: &StorefrontSystem, server: storefront::mock::MockServer) -> BrowseProducts {
    BrowseProducts::start(
        &system.api(server),
        QueryConfig::no_retry(),
        system.cart_client.clone(),
        system.cart_id,
    )
}

#[tokio::test]
async fn test_filtering_by_category() {
    let system = start().await;
    let db = system.mock_db();

    let mut categories: Vec<Category> = Vec::new();
    for _ in 0..3 {
        let category = db.create_category().await.unwrap();
        for _ in 0..3 {
            db.create_product(Some(&category)).await.unwrap();
        }
        categories.push(category);
    }

    let mut page = browse(&system, system.mock_server());
    page.settled().await;
    assert_eq!(page.visible_products().len(), 9);

    let options = page.category_options().expect("Category select not shown");
    assert_eq!(options.len(), 4);
    assert_eq!(options[0].1, "All");

    let b = &categories[1];
    page.select_category(Some(b.id));
    let visible = page.visible_products();
    assert_eq!(visible.len(), 3);
    assert!(visible.iter().all(|p| p.category_id == b.id));

    let rendered = page.render().await.unwrap();
    for product in &visible {
        assert!(rendered.contains(&product.name));
    }
    assert!(rendered.contains(&format!("[{}]", b.name)));

    page.select_category(None);
    assert_eq!(page.visible_products().len(), 9);
}

#[tokio::test]
async fn test_browse_skeletons_while_loading() {
    let system = start().await;
    let server = system.mock_server();
    server.simulate_delay("/products", Duration::from_millis(200));
    server.simulate_delay("/categories", Duration::from_millis(200));

    let mut page = browse(&system, server);
    let rendered = page.render().await.unwrap();
    assert!(rendered.starts_with("Products"));
    assert!(rendered.contains(LOADING_CATEGORIES));
    assert_eq!(rendered.matches(LOADING_PRODUCT).count(), 15);

    page.settled().await;
    let rendered = page.render().await.unwrap();
    assert!(!rendered.contains(LOADING_PRODUCT));
    assert!(!rendered.contains(LOADING_CATEGORIES));
}

#[tokio::test]
async fn test_browse_errors() {
    let system = start().await;
    let db = system.mock_db();
    db.create_product(None).await.unwrap();

    // A failing category list just hides the select
    let server = system.mock_server();
    server.simulate_error("/categories");
    let mut page = browse(&system, server.clone());
    page.settled().await;
    let rendered = page.render().await.unwrap();
    assert!(page.category_options().is_none());
    assert!(!rendered.contains("Error"));
    assert!(!rendered.contains("Category:"));
    assert_eq!(page.visible_products().len(), 1);

    // A failing product list replaces the page
    server.reset_handlers();
    server.simulate_error("/products");
    let mut page = browse(&system, server);
    page.settled().await;
    assert_eq!(page.render().await.unwrap(), "Error: Network Error");
}

#[tokio::test]
async fn test_quantity_selector_drives_the_cart() {
    let system = start().await;
    let db = system.mock_db();
    let product = db.create_product(None).await.unwrap();

    let mut page = browse(&system, system.mock_server());
    page.settled().await;
    let selector = page.quantity_selector(product.clone());

    assert_eq!(selector.view().await.unwrap(), QuantityView::AddToCart);
    assert_eq!(
        selector.add_to_cart().await.unwrap(),
        QuantityView::Controls { quantity: 1 }
    );
    assert_eq!(
        selector.increment().await.unwrap(),
        QuantityView::Controls { quantity: 2 }
    );
    assert!(page.render().await.unwrap().contains("- 2 +"));

    selector.decrement().await.unwrap();
    assert_eq!(selector.decrement().await.unwrap(), QuantityView::AddToCart);
    assert_eq!(system.cart_client.total(system.cart_id).await.unwrap(), 0.0);
}

#[tokio::test]
async fn test_product_list_states() {
    let system = start().await;
    let server = system.mock_server();

    let api = system.api(server.clone());
    let mut query = products_query(&api, QueryConfig::no_retry());
    let list = ProductList::new(query.settled().await);
    assert_eq!(list.to_string(), NO_PRODUCTS);

    server.simulate_error("/products");
    let mut query = products_query(&api, QueryConfig::no_retry());
    let list = ProductList::new(query.settled().await);
    assert!(!list.is_loading());
    assert!(list.to_string().starts_with("Error:"));

    server.respond_with(
        "/products",
        json!([{ "id": 1, "name": "Canned", "price": 3, "categoryId": 1 }]),
    );
    let mut query = products_query(&api, QueryConfig::no_retry());
    assert_eq!(ProductList::new(query.settled().await).to_string(), "- Canned");

    // Overrides are per method
    server.override_route(HttpMethod::Post, "/products", RouteOverride::Error);
    server.reset_handlers();
    let mut query = products_query(&api, QueryConfig::no_retry());
    assert_eq!(ProductList::new(query.settled().await).to_string(), NO_PRODUCTS);
}

#[tokio::test]
async fn test_product_detail() {
    let system = start().await;
    let db = system.mock_db();
    let product = db.create_product(None).await.unwrap();
    let api = system.api(system.mock_server());
    let config = QueryConfig::no_retry();

    let view = ProductDetail::load(&api, i64::from(product.id.0), config).await;
    assert_eq!(view.product(), Some(&product));
    assert!(view.to_string().starts_with(&product.name));

    let view = ProductDetail::load(&api, 0, config).await;
    assert_eq!(view.to_string(), "Invalid ProductId");

    let view = ProductDetail::load(&api, 9999, config).await;
    assert_eq!(view.to_string(), PRODUCT_NOT_FOUND);

    let server = system.mock_server();
    server.simulate_error(&format!("/products/{}", product.id));
    let failing = system.api(server);
    let view = ProductDetail::load(&failing, i64::from(product.id.0), config).await;
    assert_eq!(view.to_string(), "Error: Network Error");
}

#[tokio::test]
async fn test_retries_recover_from_a_flaky_route() {
    let system = start().await;
    let server = system.mock_server();
    server.simulate_error("/categories");

    let api = system.api(server.clone());
    let config = QueryConfig {
        retry: 3,
        retry_delay: Duration::from_millis(50),
    };
    let mut query = storefront::views::categories_query(&api, config);

    tokio::time::sleep(Duration::from_millis(10)).await;
    server.reset_handlers();

    let state = query.settled().await;
    assert!(state.data().is_some());
    assert_eq!(CategoryList::new(state).to_string(), "Category List");
}

#[tokio::test]
async fn test_not_found_is_final() {
    let system = start().await;
    let api = system.api(system.mock_server());
    let mut query = ProductDetail::query(&api, 5, QueryConfig::default());
    let state = query.settled().await;
    assert!(matches!(state.error(), Some(FetchError::NotFound(_))));
}

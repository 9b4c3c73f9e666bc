use std::time::Duration;

use storefront::api::HttpMethod;
use storefront::lifecycle::StorefrontSystem;
use storefront::mock::{MockDb, RouteOverride};
use storefront::model::Category;
use storefront::notifications::ToastKind;
use storefront::views::{
    ProductForm, SubmitOutcome, Toasts, PRODUCT_CREATED, PRODUCT_UPDATED, UNEXPECTED_ERROR,
};
use storefront::StorefrontConfig;
use storefront_framework::ActorClient;

async fn start() -> (StorefrontSystem, MockDb, Vec<Category>) {
    let system = StorefrontSystem::start(StorefrontConfig::default())
        .await
        .expect("Failed to start storefront");
    let db = system.mock_db();
    let categories = vec![
        db.create_category_named("Dairy").await.unwrap(),
        db.create_category_named("Bakery").await.unwrap(),
    ];
    (system, db, categories)
}

fn new_form(system: &StorefrontSystem, categories: &[Category]) -> ProductForm {
    ProductForm::new(
        system.api(system.mock_server()),
        system.toaster.clone(),
        system.translator(),
        categories.to_vec(),
    )
}

#[tokio::test]
async fn test_invalid_form_shows_the_first_violation() {
    let (system, db, categories) = start().await;
    let mut toasts = Toasts::new(&system.toaster);
    let mut form = new_form(&system, &categories);

    assert!(matches!(form.submit().await, SubmitOutcome::Invalid(_)));
    assert_eq!(form.alert(), Some("Name is required"));

    form.set_name("x".repeat(256));
    form.submit().await;
    assert!(form.alert().is_some_and(|a| a.contains("255")));

    form.set_name("Butter");
    form.set_price("abc");
    form.submit().await;
    assert!(form.alert().is_some_and(|a| a.contains("required")));

    form.set_price("1001");
    form.submit().await;
    assert!(form.alert().is_some_and(|a| a.contains("1000")));

    form.set_price("0");
    form.submit().await;
    assert_eq!(form.alert(), Some("Price must be at least 1"));

    form.set_price("3");
    form.set_category("999");
    form.submit().await;
    assert_eq!(form.alert(), Some("Category is required"));
    assert!(form.to_string().contains("! Category is required"));

    // Nothing was sent and nothing was toasted
    assert!(toasts.drain().is_empty());
    assert!(db.products().list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_new_product_is_created() {
    let (system, db, categories) = start().await;
    let mut toasts = Toasts::new(&system.toaster);
    let mut form = new_form(&system, &categories);
    assert!(form.to_string().starts_with("New Product"));
    assert_eq!(form.category_options()[1].1, "Bakery");

    form.set_name("  Sourdough ");
    form.set_price("6.5");
    form.set_category(categories[1].id.to_string());

    let SubmitOutcome::Saved(product) = form.submit().await else {
        panic!("Expected the product to be saved");
    };
    assert_eq!(product.name, "Sourdough");
    assert_eq!(product.category_id, categories[1].id);
    assert!(form.alert().is_none());
    assert!(!form.is_submitting());

    let shown = toasts.drain();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].kind, ToastKind::Success);
    assert_eq!(shown[0].message, PRODUCT_CREATED);

    assert_eq!(db.products().list().await.unwrap(), vec![product]);
}

#[tokio::test]
async fn test_edit_prefills_and_updates() {
    let (system, db, categories) = start().await;
    let product = db.create_product(Some(&categories[0])).await.unwrap();
    let mut toasts = Toasts::new(&system.toaster);

    let mut form = ProductForm::edit(
        system.api(system.mock_server()),
        system.toaster.clone(),
        system.translator(),
        categories.clone(),
        &product,
    );
    assert!(form.is_editing());
    assert_eq!(form.data().name, product.name);
    assert_eq!(form.heading(), Ok("Edit Product"));

    form.set_price("99");
    let SubmitOutcome::Saved(updated) = form.submit().await else {
        panic!("Expected the product to be updated");
    };
    assert_eq!(updated.id, product.id);
    assert_eq!(updated.price, 99.0);
    assert_eq!(toasts.drain()[0].message, PRODUCT_UPDATED);

    let stored = db.products().get(product.id).await.unwrap().unwrap();
    assert_eq!(stored.price, 99.0);
}

#[tokio::test]
async fn test_failed_request_raises_an_error_toast() {
    let (system, db, categories) = start().await;
    let server = system.mock_server();
    server.override_route(HttpMethod::Post, "/products", RouteOverride::Error);

    let mut toasts = Toasts::new(&system.toaster);
    let mut form = ProductForm::new(
        system.api(server),
        system.toaster.clone(),
        system.translator(),
        categories.clone(),
    );
    form.set_name("Butter");
    form.set_price("3");
    form.set_category(categories[0].id.to_string());

    assert!(matches!(form.submit().await, SubmitOutcome::Failed(_)));
    // A failed request is not an inline error
    assert!(form.alert().is_none());

    let shown = toasts.drain();
    assert_eq!(shown[0].kind, ToastKind::Error);
    assert_eq!(shown[0].message, UNEXPECTED_ERROR);
    assert!(db.products().list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_spanish_heading() {
    let config = StorefrontConfig {
        language: "es".parse().unwrap(),
        ..StorefrontConfig::default()
    };
    let system = StorefrontSystem::start(config).await.unwrap();
    let form = ProductForm::new(
        system.api(system.mock_server()),
        system.toaster.clone(),
        system.translator(),
        vec![],
    );
    assert_eq!(form.heading(), Ok("Nuevo Producto"));
}

#[tokio::test]
async fn test_submit_is_disabled_while_the_request_is_in_flight() {
    let (system, db, categories) = start().await;
    let server = system.mock_server();
    server.override_route(
        HttpMethod::Post,
        "/products",
        RouteOverride::Delay(Duration::from_millis(100)),
    );

    let mut toasts = Toasts::new(&system.toaster);
    let mut form = ProductForm::new(
        system.api(server),
        system.toaster.clone(),
        system.translator(),
        categories.clone(),
    );
    form.set_name("Butter");
    form.set_price("3");
    form.set_category(categories[0].id.to_string());

    let pending = form.start_submit().expect("Form should be valid");
    assert_eq!(pending.payload().name, "Butter");
    let request = tokio::spawn(pending.send());

    // The request is still waiting on the delayed route
    assert!(form.is_submitting());
    assert!(form.to_string().ends_with("[Submitting...]"));
    assert!(matches!(form.start_submit(), Err(SubmitOutcome::Busy)));
    assert!(db.products().list().await.unwrap().is_empty());

    let result = request.await.expect("Request task panicked");
    assert!(matches!(form.finish_submit(result), SubmitOutcome::Saved(_)));
    assert!(!form.is_submitting());
    assert!(form.to_string().ends_with("[Submit]"));
    assert_eq!(toasts.drain()[0].message, PRODUCT_CREATED);
    assert_eq!(db.products().list().await.unwrap().len(), 1);
}

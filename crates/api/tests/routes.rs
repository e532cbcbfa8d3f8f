use api::{handler::AppRouter, middleware::admin::AdminKey, state::AppState};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use serde_json::{Value, json};
use shared::{
    abstract_trait::DynHashing,
    config::Hashing,
    testing::{InMemoryStore, TEST_BCRYPT_COST},
};
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

const ADMIN_KEY: &str = "letmein";

async fn setup(admin_key: Option<&str>) -> (Router, Arc<InMemoryStore>) {
    let store = InMemoryStore::new();
    let state = AppState::with_repositories(
        store.repositories(),
        Arc::new(Hashing::new(TEST_BCRYPT_COST)) as DynHashing,
        AdminKey::new(admin_key.map(str::to_string)),
    )
    .await;

    (AppRouter::build(state), store)
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
    admin_key: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(key) = admin_key {
        builder = builder.header("x-admin-key", key);
    }

    let request = match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, value)
}

fn product_body(name: &str, category: &str, stock: i32) -> Value {
    json!({
        "name": name,
        "gender": "Women",
        "category": category,
        "subCategory": "Tops",
        "sizes": ["S", "M"],
        "price": 25.5,
        "stock": stock,
    })
}

fn order_body(lines: &[(Uuid, i32)]) -> Value {
    let cart_items: Vec<Value> = lines
        .iter()
        .map(|(id, quantity)| {
            json!({
                "id": id.to_string(),
                "name": "line",
                "price": 10.0,
                "quantity": quantity,
                "size": "M",
            })
        })
        .collect();

    json!({
        "cartItems": cart_items,
        "formData": { "firstName": "Grace", "email": "grace@example.com", "billingSame": true },
        "totalPrice": 40.0,
        "shippingCost": 5.0,
        "tax": 3.2,
        "discount": 0.0,
    })
}

#[tokio::test]
async fn root_reports_running() {
    let (app, _) = setup(None).await;

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"NEXAWEAR Backend Running");
}

#[tokio::test]
async fn register_then_duplicate() {
    let (app, _) = setup(None).await;
    let body = json!({ "name": "Ada", "email": "ada@example.com", "password": "pw" });

    let (status, json) = send(&app, "POST", "/api/register", Some(body.clone()), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Registration successful");

    let (status, json) = send(&app, "POST", "/api/register", Some(body), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Email already exists");
}

#[tokio::test]
async fn register_missing_field() {
    let (app, _) = setup(None).await;

    let (status, json) = send(
        &app,
        "POST",
        "/api/register",
        Some(json!({ "email": "ada@example.com", "password": "pw" })),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "All fields required");
}

#[tokio::test]
async fn login_returns_public_user() {
    let (app, _) = setup(None).await;
    send(
        &app,
        "POST",
        "/api/register",
        Some(json!({ "name": "Ada", "email": "ada@example.com", "password": "pw" })),
        None,
    )
    .await;

    let (status, json) = send(
        &app,
        "POST",
        "/api/login",
        Some(json!({ "email": "ada@example.com", "password": "pw" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Login successful");
    assert_eq!(json["user"]["name"], "Ada");
    assert!(json["user"]["id"].is_string());
    assert!(json["user"].get("password").is_none());

    let (status, json) = send(
        &app,
        "POST",
        "/api/login",
        Some(json!({ "email": "ada@example.com", "password": "nope" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Incorrect password");
}

#[tokio::test]
async fn product_mutations_need_admin_key() {
    let (app, store) = setup(Some(ADMIN_KEY)).await;
    let seeded = store.seed_product("Runner", "Footwear", 5).await;
    let path = format!("/api/products/{}", seeded.product_id);

    let (status, _) = send(&app, "POST", "/api/products", Some(product_body("Tee", "Tops", 3)), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(
        &app,
        "PUT",
        &path,
        Some(json!({ "stock": 1 })),
        Some("wrong"),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, json) = send(&app, "DELETE", &path, None, None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(json["message"].is_string());

    assert_eq!(store.stock_of(seeded.product_id).await, Some(5));

    let (status, json) = send(&app, "GET", "/api/products", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn create_and_search_products() {
    let (app, _) = setup(Some(ADMIN_KEY)).await;

    let (status, json) = send(
        &app,
        "POST",
        "/api/products",
        Some(product_body("Silk Blouse", "Tops", 4)),
        Some(ADMIN_KEY),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["message"], "Product added successfully");
    assert_eq!(json["product"]["subCategory"], "Tops");
    assert!(json["product"]["_id"].is_string());

    send(
        &app,
        "POST",
        "/api/products",
        Some(product_body("Denim Jacket", "Outerwear", 2)),
        Some(ADMIN_KEY),
    )
    .await;

    let (status, json) = send(&app, "GET", "/api/products?query=OUTER", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|p| p["name"].as_str())
        .collect();
    assert_eq!(names, vec!["Denim Jacket"]);

    let (_, json) = send(&app, "GET", "/api/products", None, None).await;
    assert_eq!(json.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn create_product_rejects_negative_stock() {
    let (app, _) = setup(None).await;

    let (status, json) = send(
        &app,
        "POST",
        "/api/products",
        Some(product_body("Tee", "Tops", -1)),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Stock cannot be negative");
}

#[tokio::test]
async fn update_stock_for_unknown_id_yields_null_product() {
    let (app, store) = setup(None).await;
    let seeded = store.seed_product("Runner", "Footwear", 5).await;

    let (status, json) = send(
        &app,
        "PUT",
        &format!("/api/products/{}", seeded.product_id),
        Some(json!({ "stock": 9 })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Stock updated");
    assert_eq!(json["product"]["stock"], 9);

    let (status, json) = send(
        &app,
        "PUT",
        &format!("/api/products/{}", Uuid::new_v4()),
        Some(json!({ "stock": 9 })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Stock updated");
    assert!(json["product"].is_null());
}

#[tokio::test]
async fn delete_missing_then_existing_product() {
    let (app, store) = setup(Some(ADMIN_KEY)).await;
    let seeded = store.seed_product("Runner", "Footwear", 5).await;

    let (status, json) = send(
        &app,
        "DELETE",
        &format!("/api/products/{}", Uuid::new_v4()),
        None,
        Some(ADMIN_KEY),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Product not found");

    let (status, json) = send(
        &app,
        "DELETE",
        &format!("/api/products/{}", seeded.product_id),
        None,
        Some(ADMIN_KEY),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Product deleted successfully");

    let (_, json) = send(&app, "GET", "/api/products", None, None).await;
    assert_eq!(json.as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn order_places_and_decrements() {
    let (app, store) = setup(None).await;
    let shirt = store.seed_product("Shirt", "Tops", 5).await;
    let boot = store.seed_product("Boot", "Footwear", 2).await;

    let (status, json) = send(
        &app,
        "POST",
        "/api/order",
        Some(order_body(&[(shirt.product_id, 2), (boot.product_id, 2)])),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["message"], "Order placed and stock updated");
    assert_eq!(json["order"]["orderStatus"], "Pending");
    assert_eq!(json["order"]["formData"]["firstName"], "Grace");
    assert_eq!(json["order"]["cartItems"][1]["quantity"], 2);
    assert!(json["order"]["_id"].is_string());

    assert_eq!(store.stock_of(shirt.product_id).await, Some(3));
    assert_eq!(store.stock_of(boot.product_id).await, Some(0));
}

#[tokio::test]
async fn order_rejected_when_any_line_is_short() {
    let (app, store) = setup(None).await;
    let shirt = store.seed_product("Shirt", "Tops", 5).await;
    let boot = store.seed_product("Boot", "Footwear", 1).await;

    let (status, json) = send(
        &app,
        "POST",
        "/api/order",
        Some(order_body(&[(shirt.product_id, 2), (boot.product_id, 3)])),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Not enough stock for Boot");
    assert_eq!(store.stock_of(shirt.product_id).await, Some(5));
    assert!(store.orders().await.is_empty());
}

#[tokio::test]
async fn newsletter_rejects_repeat_subscription() {
    let (app, _) = setup(None).await;
    let body = json!({ "email": "reader@example.com" });

    let (status, json) = send(&app, "POST", "/api/newsletter", Some(body.clone()), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Subscribed successfully!");

    let (status, json) = send(&app, "POST", "/api/newsletter", Some(body), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Email already subscribed");

    let (status, json) = send(&app, "POST", "/api/newsletter", Some(json!({})), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Email is required");
}

#[tokio::test]
async fn metrics_expose_service_counters() {
    let (app, _) = setup(None).await;
    send(
        &app,
        "POST",
        "/api/newsletter",
        Some(json!({ "email": "reader@example.com" })),
        None,
    )
    .await;

    let response = app
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("newsletter_service_request_counter_total"));
}

//! Fixtures shared by the Postgres repository tests.

use shared::{
    config::ConnectionPool,
    domain::requests::{CartItemRequest, CreateOrderRequest, CreateProductRequest},
    model::Product,
    repository::Repositories,
};
use uuid::Uuid;

pub async fn seed_product(
    repos: &Repositories,
    name: &str,
    category: &str,
    sizes: &[&str],
    price: f64,
    stock: i32,
) -> Product {
    repos
        .product
        .command
        .create_product(&CreateProductRequest {
            name: name.into(),
            gender: "Unisex".into(),
            category: category.into(),
            sizes: sizes.iter().map(|s| s.to_string()).collect(),
            price: Some(price),
            stock,
            ..Default::default()
        })
        .await
        .unwrap()
}

pub fn line(product: &Product, quantity: i32) -> CartItemRequest {
    CartItemRequest {
        id: product.product_id.to_string(),
        name: product.name.clone(),
        price: product.price,
        quantity,
        ..Default::default()
    }
}

pub fn order(cart_items: Vec<CartItemRequest>) -> CreateOrderRequest {
    CreateOrderRequest {
        cart_items,
        total_price: 20.0,
        ..Default::default()
    }
}

pub async fn stock_of(pool: &ConnectionPool, id: Uuid) -> i32 {
    sqlx::query_scalar("SELECT stock FROM products WHERE product_id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn order_count(pool: &ConnectionPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM orders")
        .fetch_one(pool)
        .await
        .unwrap()
}

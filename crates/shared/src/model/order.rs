use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Json};
use utoipa::ToSchema;
use uuid::Uuid;

pub const ORDER_STATUS_PENDING: &str = "Pending";

/// Shipping and billing details as submitted by the checkout form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct FormData {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub apartment: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub shipping_method: Option<String>,
    pub payment_method: Option<String>,
    pub billing_same: Option<bool>,
    pub billing_first_name: Option<String>,
    pub billing_last_name: Option<String>,
    pub billing_address: Option<String>,
    pub billing_apartment: Option<String>,
    pub billing_city: Option<String>,
    pub billing_postal_code: Option<String>,
}

/// Snapshot of a product line at checkout time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    pub size: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct Order {
    pub order_id: Uuid,
    pub form_data: Json<FormData>,
    pub cart_items: Json<Vec<CartItem>>,
    pub total_price: f64,
    pub shipping_cost: f64,
    pub tax: f64,
    pub discount: f64,
    pub order_status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

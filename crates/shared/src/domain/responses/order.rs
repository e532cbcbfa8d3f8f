use crate::model::{CartItem, FormData, Order};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub form_data: FormData,
    pub cart_items: Vec<CartItem>,
    pub total_price: f64,
    pub shipping_cost: f64,
    pub tax: f64,
    pub discount: f64,
    pub order_status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Order> for OrderResponse {
    fn from(value: Order) -> Self {
        OrderResponse {
            id: value.order_id,
            form_data: value.form_data.0,
            cart_items: value.cart_items.0,
            total_price: value.total_price,
            shipping_cost: value.shipping_cost,
            tax: value.tax,
            discount: value.discount,
            order_status: value.order_status,
            created_at: value.created_at.to_rfc3339(),
            updated_at: value.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderMessageResponse {
    pub message: String,
    pub order: OrderResponse,
}

use crate::model::{CartItem, FormData};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct CartItemRequest {
    #[schema(example = "3f0c5b2e-8a4d-4c55-9a57-2f0f1f2b7c11")]
    pub id: String,

    pub name: String,

    pub price: f64,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    #[schema(example = 2)]
    pub quantity: i32,

    pub size: Option<String>,

    pub image: Option<String>,
}

impl From<CartItemRequest> for CartItem {
    fn from(value: CartItemRequest) -> Self {
        CartItem {
            id: value.id,
            name: value.name,
            price: value.price,
            quantity: value.quantity,
            size: value.size,
            image: value.image,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateOrderRequest {
    #[validate(length(min = 1, message = "Cart is empty"), nested)]
    pub cart_items: Vec<CartItemRequest>,

    pub form_data: FormData,

    pub total_price: f64,

    pub shipping_cost: f64,

    pub tax: f64,

    pub discount: f64,
}

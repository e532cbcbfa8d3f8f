use crate::model::Product;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub gender: String,
    pub category: String,
    pub sub_category: Option<String>,
    pub sub_sub_category: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub sizes: Vec<String>,
    pub price: f64,
    pub stock: i32,
    pub image: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Product> for ProductResponse {
    fn from(value: Product) -> Self {
        ProductResponse {
            id: value.product_id,
            name: value.name,
            gender: value.gender,
            category: value.category,
            sub_category: value.sub_category,
            sub_sub_category: value.sub_sub_category,
            description: value.description,
            color: value.color,
            sizes: value.sizes,
            price: value.price,
            stock: value.stock,
            image: value.image,
            created_at: value.created_at.to_rfc3339(),
            updated_at: value.updated_at.to_rfc3339(),
        }
    }
}

/// `product` is `null` when a stock update targets an id that does not exist.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductMessageResponse {
    pub message: String,
    pub product: Option<ProductResponse>,
}

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FindAllProducts {
    /// Free-text filter matched against name, categories, description, color, sizes and price.
    #[serde(default)]
    pub query: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Linen Shirt")]
    pub name: String,

    #[validate(length(min = 1, message = "Gender is required"))]
    #[schema(example = "Men")]
    pub gender: String,

    #[validate(length(min = 1, message = "Category is required"))]
    #[schema(example = "Clothing")]
    pub category: String,

    #[schema(example = "Shirts")]
    pub sub_category: Option<String>,

    pub sub_sub_category: Option<String>,

    pub description: Option<String>,

    pub color: Option<String>,

    #[schema(example = json!(["S", "M", "L"]))]
    pub sizes: Vec<String>,

    #[validate(
        required(message = "Price is required"),
        range(min = 0.0, message = "Price cannot be negative")
    )]
    #[schema(example = 49.99)]
    pub price: Option<f64>,

    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    #[schema(example = 100)]
    pub stock: i32,

    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct UpdateStockRequest {
    #[validate(
        required(message = "Stock is required"),
        range(min = 0, message = "Stock cannot be negative")
    )]
    #[schema(example = 25)]
    pub stock: Option<i32>,
}

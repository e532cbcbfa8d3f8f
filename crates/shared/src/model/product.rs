use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub product_id: Uuid,
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

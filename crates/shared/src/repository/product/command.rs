use super::query::PRODUCT_COLUMNS;
use crate::{
    abstract_trait::ProductCommandRepositoryTrait, config::ConnectionPool,
    domain::requests::CreateProductRequest, errors::RepositoryError,
    model::Product as ProductModel,
};
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(
        &self,
        product: &CreateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!(
            r#"
            INSERT INTO products (product_id, name, gender, category, sub_category,
                sub_sub_category, description, color, sizes, price, stock, image,
                created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
                current_timestamp, current_timestamp)
            RETURNING {PRODUCT_COLUMNS}
            "#
        );

        let result = sqlx::query_as::<_, ProductModel>(&sql)
            .bind(Uuid::new_v4())
            .bind(&product.name)
            .bind(&product.gender)
            .bind(&product.category)
            .bind(&product.sub_category)
            .bind(&product.sub_sub_category)
            .bind(&product.description)
            .bind(&product.color)
            .bind(&product.sizes)
            .bind(product.price.unwrap_or_default())
            .bind(product.stock)
            .bind(&product.image)
            .fetch_one(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to create product {}: {:?}", product.name, err);
                RepositoryError::from(err)
            })?;

        info!(
            "✅ Created product ID {} ({})",
            result.product_id, result.name
        );
        Ok(result)
    }

    async fn update_stock(
        &self,
        id: Uuid,
        stock: i32,
    ) -> Result<Option<ProductModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!(
            r#"
            UPDATE products
            SET stock = $2,
                updated_at = current_timestamp
            WHERE product_id = $1
            RETURNING {PRODUCT_COLUMNS}
            "#
        );

        let result = sqlx::query_as::<_, ProductModel>(&sql)
            .bind(id)
            .bind(stock)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to update stock for product ID {id}: {err:?}");
                RepositoryError::from(err)
            })?;

        match &result {
            Some(product) => info!("🔄 Product ID {} stock set to {}", product.product_id, stock),
            None => info!("⚠️ No product with ID {id}, stock left untouched"),
        }

        Ok(result)
    }

    async fn delete_product(&self, id: Uuid) -> Result<Option<ProductModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!("DELETE FROM products WHERE product_id = $1 RETURNING {PRODUCT_COLUMNS}");

        let result = sqlx::query_as::<_, ProductModel>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete product ID {id}: {err:?}");
                RepositoryError::from(err)
            })?;

        if result.is_some() {
            info!("🗑️ Deleted product ID {id}");
        }

        Ok(result)
    }
}

use crate::{
    abstract_trait::ProductQueryRepositoryTrait, config::ConnectionPool,
    domain::search::ProductSearch, errors::RepositoryError, model::Product as ProductModel,
};
use async_trait::async_trait;
use tracing::{error, info};

pub(super) const PRODUCT_COLUMNS: &str = "product_id, name, gender, category, sub_category, \
     sub_sub_category, description, color, sizes, price, stock, image, created_at, updated_at";

pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(
        &self,
        search: Option<&ProductSearch>,
    ) -> Result<Vec<ProductModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let products = match search {
            Some(search) => {
                let sql = format!(
                    "SELECT {PRODUCT_COLUMNS} FROM products WHERE {} ORDER BY created_at ASC",
                    ProductSearch::sql_predicate("$1")
                );

                sqlx::query_as::<_, ProductModel>(&sql)
                    .bind(search.like_pattern())
                    .fetch_all(&mut *conn)
                    .await
            }
            None => {
                let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY created_at ASC");

                sqlx::query_as::<_, ProductModel>(&sql)
                    .fetch_all(&mut *conn)
                    .await
            }
        }
        .map_err(|err| {
            error!("❌ Failed to fetch products: {err:?}");
            RepositoryError::from(err)
        })?;

        info!(
            "🔍 Found {} products (query: {:?})",
            products.len(),
            search.map(|s| s.term())
        );

        Ok(products)
    }
}

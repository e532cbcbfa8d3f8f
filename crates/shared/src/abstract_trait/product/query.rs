use crate::{
    domain::{requests::FindAllProducts, responses::ProductResponse, search::ProductSearch},
    errors::{RepositoryError, ServiceError},
    model::Product as ProductModel,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;
pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    /// Every product when `search` is `None`, otherwise only the matching ones.
    async fn find_all(
        &self,
        search: Option<&ProductSearch>,
    ) -> Result<Vec<ProductModel>, RepositoryError>;
}

#[async_trait]
pub trait ProductQueryServiceTrait {
    async fn find_all(&self, req: &FindAllProducts)
    -> Result<Vec<ProductResponse>, ServiceError>;
}

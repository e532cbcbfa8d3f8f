use crate::{
    domain::{
        requests::{CreateProductRequest, UpdateStockRequest},
        responses::{MessageResponse, ProductMessageResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Product as ProductModel,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;
pub type DynProductCommandService = Arc<dyn ProductCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductModel, RepositoryError>;
    /// `None` when no product has this id.
    async fn update_stock(
        &self,
        id: Uuid,
        stock: i32,
    ) -> Result<Option<ProductModel>, RepositoryError>;
    /// Returns the removed row, `None` when nothing was deleted.
    async fn delete_product(&self, id: Uuid) -> Result<Option<ProductModel>, RepositoryError>;
}

#[async_trait]
pub trait ProductCommandServiceTrait {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductMessageResponse, ServiceError>;
    async fn update_stock(
        &self,
        id: &str,
        req: &UpdateStockRequest,
    ) -> Result<ProductMessageResponse, ServiceError>;
    async fn delete_product(&self, id: &str) -> Result<MessageResponse, ServiceError>;
}

use crate::{
    domain::{requests::CreateOrderRequest, responses::OrderMessageResponse},
    errors::{RepositoryError, ServiceError},
    model::Order as OrderModel,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;
pub type DynOrderCommandService = Arc<dyn OrderCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    /// Decrements stock for every cart line and inserts the order, all or nothing.
    ///
    /// Lines are processed in cart order; the first line whose product is
    /// missing or short on stock aborts the whole placement with
    /// `RepositoryError::StockShortage` and leaves no trace in the store.
    async fn place_order(&self, req: &CreateOrderRequest) -> Result<OrderModel, RepositoryError>;
}

#[async_trait]
pub trait OrderCommandServiceTrait {
    async fn create_order(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<OrderMessageResponse, ServiceError>;
}

use crate::{
    domain::{requests::RegisterRequest, responses::MessageResponse},
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynRegisterService = Arc<dyn RegisterServiceTrait + Send + Sync>;

#[async_trait]
pub trait RegisterServiceTrait {
    async fn register(&self, req: &RegisterRequest) -> Result<MessageResponse, ServiceError>;
}

use crate::{
    domain::{requests::SubscribeRequest, responses::MessageResponse},
    errors::{RepositoryError, ServiceError},
    model::Subscriber as SubscriberModel,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynSubscriberRepository = Arc<dyn SubscriberRepositoryTrait + Send + Sync>;
pub type DynNewsletterService = Arc<dyn NewsletterServiceTrait + Send + Sync>;

#[async_trait]
pub trait SubscriberRepositoryTrait {
    async fn find_by_email(&self, email: &str)
    -> Result<Option<SubscriberModel>, RepositoryError>;
    /// Fails with `AlreadyExists` when the email is already subscribed.
    async fn create(&self, email: &str) -> Result<SubscriberModel, RepositoryError>;
}

#[async_trait]
pub trait NewsletterServiceTrait {
    async fn subscribe(&self, req: &SubscribeRequest) -> Result<MessageResponse, ServiceError>;
}

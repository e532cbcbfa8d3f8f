use crate::{
    abstract_trait::{DynSubscriberRepository, NewsletterServiceTrait},
    domain::{requests::SubscribeRequest, responses::MessageResponse},
    errors::{RepositoryError, ServiceError},
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};
use validator::Validate;

const ALREADY_SUBSCRIBED: &str = "Email already subscribed";

pub struct SubscribeService {
    subscribers: DynSubscriberRepository,
    metrics: Metrics,
}

impl SubscribeService {
    pub async fn new(subscribers: DynSubscriberRepository, registry: Arc<Mutex<Registry>>) -> Self {
        let metrics = Metrics::register(
            &mut *registry.lock().await,
            "newsletter_service",
            "NewsletterService",
        );

        Self {
            subscribers,
            metrics,
        }
    }
}

#[async_trait]
impl NewsletterServiceTrait for SubscribeService {
    async fn subscribe(&self, req: &SubscribeRequest) -> Result<MessageResponse, ServiceError> {
        let tracing_ctx = TracingContext::start("Subscribe", Method::Post);

        if let Err(errors) = req.validate() {
            tracing_ctx.complete(&self.metrics, false, "Missing email");
            return Err(errors.into());
        }

        match self.subscribers.find_by_email(&req.email).await {
            Ok(Some(_)) => {
                tracing_ctx.complete(&self.metrics, false, ALREADY_SUBSCRIBED);
                return Err(ServiceError::AlreadyExists(ALREADY_SUBSCRIBED.into()));
            }
            Ok(None) => {}
            Err(e) => {
                error!("❌ Failed to check subscriber {}: {e:?}", req.email);
                tracing_ctx.complete(&self.metrics, false, "Database error");
                return Err(ServiceError::Repo(e));
            }
        }

        match self.subscribers.create(&req.email).await {
            Ok(_) => {}
            Err(RepositoryError::AlreadyExists(_)) => {
                tracing_ctx.complete(&self.metrics, false, ALREADY_SUBSCRIBED);
                return Err(ServiceError::AlreadyExists(ALREADY_SUBSCRIBED.into()));
            }
            Err(e) => {
                error!("❌ Failed to store subscriber {}: {e:?}", req.email);
                tracing_ctx.complete(&self.metrics, false, "Database error");
                return Err(ServiceError::Repo(e));
            }
        }

        info!("📩 New newsletter subscriber: {}", req.email);
        tracing_ctx.complete(&self.metrics, true, "Subscribed");

        Ok(MessageResponse::new("Subscribed successfully!"))
    }
}

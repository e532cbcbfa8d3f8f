mod subscribe;

use self::subscribe::SubscribeService;
use crate::abstract_trait::{DynNewsletterService, DynSubscriberRepository};
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct NewsletterService {
    pub subscribe: DynNewsletterService,
}

pub struct NewsletterServiceDeps {
    pub subscribers: DynSubscriberRepository,
    pub registry: Arc<Mutex<Registry>>,
}

impl NewsletterService {
    pub async fn new(deps: NewsletterServiceDeps) -> Self {
        let subscribe = Arc::new(SubscribeService::new(deps.subscribers, deps.registry).await)
            as DynNewsletterService;

        Self { subscribe }
    }
}

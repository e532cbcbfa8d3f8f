use crate::{
    abstract_trait::DynHashing,
    repository::Repositories,
    service::{
        AuthService, AuthServiceDeps, NewsletterService, NewsletterServiceDeps, OrderService,
        OrderServiceDeps, ProductService, ProductServiceDeps,
    },
};
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: AuthService,
    pub product_service: ProductService,
    pub order_service: OrderService,
    pub newsletter_service: NewsletterService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_service", &"<AuthService>")
            .field("product_service", &"<ProductService>")
            .field("order_service", &"<OrderService>")
            .field("newsletter_service", &"<NewsletterService>")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub repositories: Repositories,
    pub hash: DynHashing,
    pub registry: Arc<Mutex<Registry>>,
}

impl DependenciesInject {
    pub async fn new(deps: DependenciesInjectDeps) -> Self {
        let DependenciesInjectDeps {
            repositories,
            hash,
            registry,
        } = deps;

        let auth_service = AuthService::new(AuthServiceDeps {
            hash,
            user_query: repositories.user.query.clone(),
            user_command: repositories.user.command.clone(),
            registry: registry.clone(),
        })
        .await;

        let product_service = ProductService::new(ProductServiceDeps {
            query: repositories.product.query.clone(),
            command: repositories.product.command.clone(),
            registry: registry.clone(),
        })
        .await;

        let order_service = OrderService::new(OrderServiceDeps {
            command: repositories.order.command.clone(),
            registry: registry.clone(),
        })
        .await;

        let newsletter_service = NewsletterService::new(NewsletterServiceDeps {
            subscribers: repositories.subscriber.store.clone(),
            registry,
        })
        .await;

        Self {
            auth_service,
            product_service,
            order_service,
            newsletter_service,
        }
    }
}

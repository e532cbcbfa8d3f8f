use crate::{
    abstract_trait::{DynProductQueryRepository, ProductQueryServiceTrait},
    domain::{requests::FindAllProducts, responses::ProductResponse, search::ProductSearch},
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

pub struct ProductQueryService {
    query: DynProductQueryRepository,
    metrics: Metrics,
}

impl ProductQueryService {
    pub async fn new(query: DynProductQueryRepository, registry: Arc<Mutex<Registry>>) -> Self {
        let metrics = Metrics::register(
            &mut *registry.lock().await,
            "product_query_service",
            "ProductQueryService",
        );

        Self { query, metrics }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<Vec<ProductResponse>, ServiceError> {
        let search = ProductSearch::parse(req.query.as_deref());

        info!(
            "🔍 Listing products | Query: {:?}",
            search.as_ref().map(|s| s.term())
        );

        let tracing_ctx = TracingContext::start("FindAllProducts", Method::Get);

        let products = match self.query.find_all(search.as_ref()).await {
            Ok(products) => products,
            Err(e) => {
                error!("❌ Failed to fetch products: {e:?}");
                tracing_ctx.complete(&self.metrics, false, "Failed to fetch products");
                return Err(ServiceError::Repo(e));
            }
        };

        let response: Vec<ProductResponse> =
            products.into_iter().map(ProductResponse::from).collect();

        tracing_ctx.complete(
            &self.metrics,
            true,
            &format!("Fetched {} products", response.len()),
        );

        Ok(response)
    }
}

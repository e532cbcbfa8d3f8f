use crate::{
    abstract_trait::{DynOrderCommandRepository, OrderCommandServiceTrait},
    domain::{
        requests::CreateOrderRequest,
        responses::{OrderMessageResponse, OrderResponse},
    },
    errors::{RepositoryError, ServiceError},
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};
use validator::Validate;

pub struct OrderCommandService {
    command: DynOrderCommandRepository,
    metrics: Metrics,
}

impl OrderCommandService {
    pub async fn new(command: DynOrderCommandRepository, registry: Arc<Mutex<Registry>>) -> Self {
        let metrics = Metrics::register(
            &mut *registry.lock().await,
            "order_command_service",
            "OrderCommandService",
        );

        Self { command, metrics }
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn create_order(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<OrderMessageResponse, ServiceError> {
        info!(
            "🛒 Placing order | Items: {} | Total: {}",
            req.cart_items.len(),
            req.total_price
        );

        let tracing_ctx = TracingContext::start("CreateOrder", Method::Post);

        if let Err(errors) = req.validate() {
            tracing_ctx.complete(&self.metrics, false, "Invalid order payload");
            return Err(errors.into());
        }

        let order = match self.command.place_order(req).await {
            Ok(order) => order,
            Err(RepositoryError::StockShortage { product }) => {
                let msg = format!("Not enough stock for {product}");
                tracing_ctx.complete(&self.metrics, false, &msg);
                return Err(ServiceError::InsufficientStock(msg));
            }
            Err(e) => {
                error!("❌ Failed to place order: {e:?}");
                tracing_ctx.complete(&self.metrics, false, "Failed to place order");
                return Err(ServiceError::Repo(e));
            }
        };

        info!("✅ Order {} placed", order.order_id);
        tracing_ctx.complete(&self.metrics, true, "Order placed");

        Ok(OrderMessageResponse {
            message: "Order placed and stock updated".into(),
            order: OrderResponse::from(order),
        })
    }
}

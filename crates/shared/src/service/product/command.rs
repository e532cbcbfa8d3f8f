use crate::{
    abstract_trait::{DynProductCommandRepository, ProductCommandServiceTrait},
    domain::{
        requests::{CreateProductRequest, UpdateStockRequest},
        responses::{MessageResponse, ProductMessageResponse, ProductResponse},
    },
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};
use uuid::Uuid;
use validator::Validate;

const PRODUCT_NOT_FOUND: &str = "Product not found";

pub struct ProductCommandService {
    command: DynProductCommandRepository,
    metrics: Metrics,
}

impl ProductCommandService {
    pub async fn new(command: DynProductCommandRepository, registry: Arc<Mutex<Registry>>) -> Self {
        let metrics = Metrics::register(
            &mut *registry.lock().await,
            "product_command_service",
            "ProductCommandService",
        );

        Self { command, metrics }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductMessageResponse, ServiceError> {
        info!("🆕 Creating product: {}", req.name);

        let tracing_ctx = TracingContext::start("CreateProduct", Method::Post);

        if let Err(errors) = req.validate() {
            tracing_ctx.complete(&self.metrics, false, "Invalid product payload");
            return Err(errors.into());
        }

        let product = match self.command.create_product(req).await {
            Ok(product) => product,
            Err(e) => {
                error!("❌ Failed to create product {}: {e:?}", req.name);
                tracing_ctx.complete(&self.metrics, false, "Failed to create product");
                return Err(ServiceError::Repo(e));
            }
        };

        tracing_ctx.complete(&self.metrics, true, "Product created");

        Ok(ProductMessageResponse {
            message: "Product added successfully".into(),
            product: Some(ProductResponse::from(product)),
        })
    }

    async fn update_stock(
        &self,
        id: &str,
        req: &UpdateStockRequest,
    ) -> Result<ProductMessageResponse, ServiceError> {
        info!("🔄 Updating stock for product {id}");

        let tracing_ctx = TracingContext::start("UpdateStock", Method::Put);

        if let Err(errors) = req.validate() {
            tracing_ctx.complete(&self.metrics, false, "Invalid stock payload");
            return Err(errors.into());
        }

        let stock = req.stock.unwrap_or_default();

        let updated = match Uuid::parse_str(id) {
            Ok(product_id) => match self.command.update_stock(product_id, stock).await {
                Ok(product) => product,
                Err(e) => {
                    error!("❌ Failed to update stock for product {id}: {e:?}");
                    tracing_ctx.complete(&self.metrics, false, "Failed to update stock");
                    return Err(ServiceError::Repo(e));
                }
            },
            Err(_) => {
                warn!("⚠️ Malformed product id {id:?}, nothing to update");
                None
            }
        };

        tracing_ctx.complete(&self.metrics, true, "Stock updated");

        Ok(ProductMessageResponse {
            message: "Stock updated".into(),
            product: updated.map(ProductResponse::from),
        })
    }

    async fn delete_product(&self, id: &str) -> Result<MessageResponse, ServiceError> {
        info!("🗑️ Deleting product {id}");

        let tracing_ctx = TracingContext::start("DeleteProduct", Method::Delete);

        let Ok(product_id) = Uuid::parse_str(id) else {
            warn!("⚠️ Malformed product id {id:?}");
            tracing_ctx.complete(&self.metrics, false, PRODUCT_NOT_FOUND);
            return Err(ServiceError::NotFound(PRODUCT_NOT_FOUND.into()));
        };

        match self.command.delete_product(product_id).await {
            Ok(Some(_)) => {
                tracing_ctx.complete(&self.metrics, true, "Product deleted");
                Ok(MessageResponse::new("Product deleted successfully"))
            }
            Ok(None) => {
                tracing_ctx.complete(&self.metrics, false, PRODUCT_NOT_FOUND);
                Err(ServiceError::NotFound(PRODUCT_NOT_FOUND.into()))
            }
            Err(e) => {
                error!("❌ Failed to delete product {id}: {e:?}");
                tracing_ctx.complete(&self.metrics, false, "Failed to delete product");
                Err(ServiceError::Repo(e))
            }
        }
    }
}

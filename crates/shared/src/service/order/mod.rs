mod command;

use self::command::OrderCommandService;
use crate::abstract_trait::{DynOrderCommandRepository, DynOrderCommandService};
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct OrderService {
    pub command: DynOrderCommandService,
}

pub struct OrderServiceDeps {
    pub command: DynOrderCommandRepository,
    pub registry: Arc<Mutex<Registry>>,
}

impl fmt::Debug for OrderService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderService")
            .field("command", &"Arc<dyn OrderCommandServiceTrait>")
            .finish()
    }
}

impl OrderService {
    pub async fn new(deps: OrderServiceDeps) -> Self {
        let command = Arc::new(OrderCommandService::new(deps.command, deps.registry).await)
            as DynOrderCommandService;

        Self { command }
    }
}

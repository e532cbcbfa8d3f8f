mod command;

use self::command::OrderCommandRepository;

use crate::{abstract_trait::DynOrderCommandRepository, config::ConnectionPool};
use std::sync::Arc;

#[derive(Clone)]
pub struct OrderRepository {
    pub command: DynOrderCommandRepository,
}

impl OrderRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        let command = Arc::new(OrderCommandRepository::new(pool)) as DynOrderCommandRepository;

        Self { command }
    }
}

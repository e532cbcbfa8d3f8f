mod command;

use self::command::SubscriberPgRepository;

use crate::{abstract_trait::DynSubscriberRepository, config::ConnectionPool};
use std::sync::Arc;

#[derive(Clone)]
pub struct SubscriberRepository {
    pub store: DynSubscriberRepository,
}

impl SubscriberRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        let store = Arc::new(SubscriberPgRepository::new(pool)) as DynSubscriberRepository;

        Self { store }
    }
}

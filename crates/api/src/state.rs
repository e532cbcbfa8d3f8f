use crate::middleware::admin::AdminKey;
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::DynHashing,
    config::{Config, ConnectionPool, Hashing},
    di::{DependenciesInject, DependenciesInjectDeps},
    repository::Repositories,
};
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Mutex<Registry>>,
    pub admin_key: AdminKey,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .field("admin_key_configured", &self.admin_key.is_configured())
            .finish()
    }
}

impl AppState {
    pub async fn new(pool: ConnectionPool, config: &Config) -> Self {
        let hashing = Arc::new(Hashing::new(config.bcrypt_cost)) as DynHashing;

        Self::with_repositories(
            Repositories::new(pool),
            hashing,
            AdminKey::new(config.admin_api_key.clone()),
        )
        .await
    }

    pub async fn with_repositories(
        repositories: Repositories,
        hash: DynHashing,
        admin_key: AdminKey,
    ) -> Self {
        let registry = Arc::new(Mutex::new(Registry::default()));

        let di_container = DependenciesInject::new(DependenciesInjectDeps {
            repositories,
            hash,
            registry: registry.clone(),
        })
        .await;

        Self {
            di_container,
            registry,
            admin_key,
        }
    }
}

mod login;
mod register;

use self::login::{LoginService, LoginServiceDeps};
use self::register::{RegisterService, RegisterServiceDeps};
use crate::abstract_trait::{
    DynHashing, DynLoginService, DynRegisterService, DynUserCommandRepository,
    DynUserQueryRepository,
};
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AuthService {
    pub login: DynLoginService,
    pub register: DynRegisterService,
}

#[derive(Clone)]
pub struct AuthServiceDeps {
    pub hash: DynHashing,
    pub user_query: DynUserQueryRepository,
    pub user_command: DynUserCommandRepository,
    pub registry: Arc<Mutex<Registry>>,
}

impl AuthService {
    pub async fn new(deps: AuthServiceDeps) -> Self {
        let login_deps = LoginServiceDeps {
            hash: deps.hash.clone(),
            query: deps.user_query.clone(),
            registry: deps.registry.clone(),
        };

        let login = Arc::new(LoginService::new(login_deps).await) as DynLoginService;

        let register_deps = RegisterServiceDeps {
            query: deps.user_query,
            command: deps.user_command,
            hash: deps.hash,
            registry: deps.registry,
        };

        let register = Arc::new(RegisterService::new(register_deps).await) as DynRegisterService;

        Self { login, register }
    }
}

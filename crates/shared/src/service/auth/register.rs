use crate::{
    abstract_trait::{
        DynHashing, DynUserCommandRepository, DynUserQueryRepository, RegisterServiceTrait,
    },
    domain::{
        requests::{CreateUserRequest, RegisterRequest},
        responses::MessageResponse,
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

pub struct RegisterService {
    query: DynUserQueryRepository,
    command: DynUserCommandRepository,
    hash: DynHashing,
    metrics: Metrics,
}

pub struct RegisterServiceDeps {
    pub query: DynUserQueryRepository,
    pub command: DynUserCommandRepository,
    pub hash: DynHashing,
    pub registry: Arc<Mutex<Registry>>,
}

impl RegisterService {
    pub async fn new(deps: RegisterServiceDeps) -> Self {
        let RegisterServiceDeps {
            query,
            command,
            hash,
            registry,
        } = deps;

        let metrics = Metrics::register(
            &mut *registry.lock().await,
            "register_service",
            "RegisterService",
        );

        Self {
            query,
            command,
            hash,
            metrics,
        }
    }
}

#[async_trait]
impl RegisterServiceTrait for RegisterService {
    async fn register(&self, req: &RegisterRequest) -> Result<MessageResponse, ServiceError> {
        info!(
            "📝 [REGISTER] Starting user registration | Email: {}",
            req.email
        );

        let tracing_ctx = TracingContext::start("RegisterUser", Method::Post);

        if let Err(errors) = req.validate() {
            tracing_ctx.complete(&self.metrics, false, "Invalid registration payload");
            return Err(errors.into());
        }

        let existing_user = match self.query.find_by_email(&req.email).await {
            Ok(user) => user,
            Err(e) => {
                error!("❌ Failed to check email in DB: {e:?}");
                tracing_ctx.complete(&self.metrics, false, "Database error");
                return Err(ServiceError::Repo(e));
            }
        };

        if existing_user.is_some() {
            error!("❌ [REGISTER] Email already taken | Email: {}", req.email);
            tracing_ctx.complete(&self.metrics, false, "Email already exists");
            return Err(ServiceError::AlreadyExists("Email already exists".into()));
        }

        let hashed_password = match self.hash.hash_password(&req.password).await {
            Ok(hashed) => hashed,
            Err(e) => {
                tracing_ctx.complete(&self.metrics, false, "Failed to hash password");
                return Err(e);
            }
        };

        let new_user = CreateUserRequest {
            name: req.name.clone(),
            email: req.email.clone(),
            password: hashed_password,
        };

        let user = match self.command.create_user(&new_user).await {
            Ok(user) => user,
            Err(RepositoryError::AlreadyExists(msg)) => {
                error!("❌ [REGISTER] Lost race on email | Email: {}", req.email);
                tracing_ctx.complete(&self.metrics, false, &msg);
                return Err(ServiceError::AlreadyExists(msg));
            }
            Err(e) => {
                error!("❌ Failed to create user: {e:?}");
                tracing_ctx.complete(&self.metrics, false, "Failed to create user");
                return Err(ServiceError::Repo(e));
            }
        };

        info!("✅ User registered successfully: {} ({})", user.name, user.email);
        tracing_ctx.complete(&self.metrics, true, "User registered successfully");

        Ok(MessageResponse::new("Registration successful"))
    }
}

use crate::{
    abstract_trait::{DynHashing, DynUserQueryRepository, LoginServiceTrait},
    domain::{
        requests::LoginRequest,
        responses::{LoginResponse, UserResponse},
    },
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};
use validator::Validate;

pub struct LoginService {
    hash: DynHashing,
    query: DynUserQueryRepository,
    metrics: Metrics,
}

pub struct LoginServiceDeps {
    pub hash: DynHashing,
    pub query: DynUserQueryRepository,
    pub registry: Arc<Mutex<Registry>>,
}

impl LoginService {
    pub async fn new(deps: LoginServiceDeps) -> Self {
        let LoginServiceDeps {
            hash,
            query,
            registry,
        } = deps;

        let metrics =
            Metrics::register(&mut *registry.lock().await, "login_service", "LoginService");

        Self {
            hash,
            query,
            metrics,
        }
    }
}

#[async_trait]
impl LoginServiceTrait for LoginService {
    async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, ServiceError> {
        info!("🔐 [LOGIN] Login attempt | Email: {}", req.email);

        let tracing_ctx = TracingContext::start("LoginUser", Method::Post);

        if let Err(errors) = req.validate() {
            tracing_ctx.complete(&self.metrics, false, "Invalid login payload");
            return Err(errors.into());
        }

        let user = match self.query.find_by_email(&req.email).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                warn!("⚠️ [LOGIN] Unknown email | Email: {}", req.email);
                tracing_ctx.complete(&self.metrics, false, "User not found");
                return Err(ServiceError::InvalidCredentials("User not found".into()));
            }
            Err(e) => {
                error!("❌ Failed to fetch user by email: {e:?}");
                tracing_ctx.complete(&self.metrics, false, "Database error");
                return Err(ServiceError::Repo(e));
            }
        };

        if let Err(e) = self.hash.compare_password(&user.password, &req.password).await {
            warn!("⚠️ [LOGIN] Password mismatch | Email: {}", req.email);
            tracing_ctx.complete(&self.metrics, false, "Incorrect password");
            return Err(e);
        }

        info!("✅ [LOGIN] User logged in | User ID: {}", user.user_id);
        tracing_ctx.complete(&self.metrics, true, "Login successful");

        Ok(LoginResponse {
            message: "Login successful".into(),
            user: UserResponse::from(user),
        })
    }
}

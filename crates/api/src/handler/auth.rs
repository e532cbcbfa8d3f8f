use crate::{middleware::validate::SimpleValidatedJson, state::AppState};
use axum::{Extension, Json, http::StatusCode, response::IntoResponse, routing::post};
use shared::{
    abstract_trait::{DynLoginService, DynRegisterService},
    domain::{
        requests::{LoginRequest, RegisterRequest},
        responses::{LoginResponse, MessageResponse},
    },
    errors::{ErrorResponse, HttpError},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Registration successful", body = MessageResponse),
        (status = 400, description = "Missing fields or email already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn register_user_handler(
    Extension(service): Extension<DynRegisterService>,
    SimpleValidatedJson(body): SimpleValidatedJson<RegisterRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.register(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Missing fields, unknown user or wrong password", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn login_user_handler(
    Extension(service): Extension<DynLoginService>,
    SimpleValidatedJson(body): SimpleValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.login(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn auth_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let auth = &app_state.di_container.auth_service;

    OpenApiRouter::new()
        .route("/api/register", post(register_user_handler))
        .route("/api/login", post(login_user_handler))
        .layer(Extension(auth.register.clone()))
        .layer(Extension(auth.login.clone()))
}

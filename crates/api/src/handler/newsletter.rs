use crate::{middleware::validate::SimpleValidatedJson, state::AppState};
use axum::{Extension, Json, http::StatusCode, response::IntoResponse, routing::post};
use shared::{
    abstract_trait::DynNewsletterService,
    domain::{requests::SubscribeRequest, responses::MessageResponse},
    errors::{ErrorResponse, HttpError},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/newsletter",
    tag = "Newsletter",
    request_body = SubscribeRequest,
    responses(
        (status = 200, description = "Subscribed", body = MessageResponse),
        (status = 400, description = "Missing or already subscribed email", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn subscribe(
    Extension(service): Extension<DynNewsletterService>,
    SimpleValidatedJson(body): SimpleValidatedJson<SubscribeRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.subscribe(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn newsletter_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/newsletter", post(subscribe))
        .layer(Extension(
            app_state.di_container.newsletter_service.subscribe.clone(),
        ))
}

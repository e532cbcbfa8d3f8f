use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use shared::{errors::HttpError, utils::validation_messages};
use validator::Validate;

/// JSON body that has already passed `validator` checks; failures become 400 `{message}`.
pub struct SimpleValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(json_value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| HttpError::BadRequest(rejection.body_text()))?;

        json_value.validate().map_err(|errors| {
            HttpError::BadRequest(validation_messages(&errors).join("; "))
        })?;

        Ok(Self(json_value))
    }
}

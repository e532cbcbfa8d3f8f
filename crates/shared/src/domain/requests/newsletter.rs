use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
#[serde(default)]
pub struct SubscribeRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    #[schema(example = "ada@example.com")]
    pub email: String,
}

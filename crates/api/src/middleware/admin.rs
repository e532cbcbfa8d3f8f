use axum::{
    Extension,
    body::Body,
    http::{HeaderMap, Request},
    middleware::Next,
    response::IntoResponse,
};
use shared::errors::HttpError;
use std::sync::Arc;
use tracing::warn;

pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// Shared secret that unlocks catalog mutations. `None` leaves them open.
#[derive(Clone, Debug, Default)]
pub struct AdminKey(Option<Arc<str>>);

impl AdminKey {
    pub fn new(key: Option<String>) -> Self {
        Self(key.map(Arc::from))
    }

    pub fn is_configured(&self) -> bool {
        self.0.is_some()
    }

    pub fn allows(&self, headers: &HeaderMap) -> bool {
        let Some(expected) = self.0.as_deref() else {
            return true;
        };

        headers
            .get(ADMIN_KEY_HEADER)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|presented| constant_time_eq(presented, expected))
    }
}

/// Compares without short-circuiting on the first differing byte.
fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.bytes()
        .zip(b.bytes())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}

pub async fn admin_middleware(
    Extension(admin_key): Extension<AdminKey>,
    req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, HttpError> {
    if !admin_key.allows(req.headers()) {
        warn!(
            "⛔ Rejected admin request {} {}",
            req.method(),
            req.uri().path()
        );
        return Err(HttpError::Forbidden(
            "Admin access required".to_string(),
        ));
    }

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn unconfigured_key_allows_everything() {
        assert!(AdminKey::new(None).allows(&HeaderMap::new()));
    }

    #[test]
    fn configured_key_must_match() {
        let key = AdminKey::new(Some("s3cret".into()));

        let mut headers = HeaderMap::new();
        assert!(!key.allows(&headers));

        headers.insert(ADMIN_KEY_HEADER, HeaderValue::from_static("wrong"));
        assert!(!key.allows(&headers));

        headers.insert(ADMIN_KEY_HEADER, HeaderValue::from_static("s3cret"));
        assert!(key.allows(&headers));
    }

    #[test]
    fn key_comparison_needs_every_byte() {
        assert!(constant_time_eq("s3cret", "s3cret"));
        assert!(!constant_time_eq("s3cret", "s3creT"));
        assert!(!constant_time_eq("s3cret", "s3cre"));
        assert!(!constant_time_eq("", "s3cret"));

        let key = AdminKey::new(Some("s3cret".into()));
        let mut headers = HeaderMap::new();
        headers.insert(ADMIN_KEY_HEADER, HeaderValue::from_static("s3cret-and-more"));
        assert!(!key.allows(&headers));
    }
}

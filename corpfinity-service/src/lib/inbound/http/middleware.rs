use axum::extract::Request;
use axum::http;
use axum::middleware::Next;
use axum::response::Response;

use crate::inbound::http::handlers::ApiError;

/// Raw bearer token extracted from the Authorization header.
///
/// Only the header shape is checked here; the service decides whether the
/// token itself verifies.
#[derive(Debug, Clone)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Middleware guarding routes that require a bearer token.
///
/// Stores the extracted token in request extensions for handlers to consume.
pub async fn require_bearer(mut req: Request, next: Next) -> Result<Response, ApiError> {
    let token = extract_token_from_header(&req)?.to_string();

    req.extensions_mut().insert(BearerToken(token));

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, ApiError> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::Unauthorized("Invalid Authorization header".to_string()))?;

    auth_str.strip_prefix("Bearer ").ok_or_else(|| {
        ApiError::Unauthorized(
            "Invalid Authorization header format. Expected: Bearer <token>".to_string(),
        )
    })
}

//! Authentication Middleware
//! Mission: Gate protected routes behind bearer-token verification

use crate::auth::{jwt::TokenService, models::Claims};
use crate::errors::ApiError;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Middleware that verifies the bearer token on every protected route.
///
/// On success the decoded claims land in the request extensions for
/// handlers; otherwise the request is rejected before business logic.
pub async fn auth_middleware(
    State(tokens): State<Arc<TokenService>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(|t| t.to_string())
        .ok_or(ApiError::Unauthorized)?;

    let claims = tokens.decode(&token)?;

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

/// Extract claims from a request (use after `auth_middleware`).
pub fn extract_claims(req: &Request) -> Option<&Claims> {
    req.extensions().get::<Claims>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request as HttpRequest;

    #[test]
    fn test_extract_claims_from_request() {
        let mut req = HttpRequest::new(Body::empty());

        assert!(extract_claims(&req).is_none());

        let claims = Claims {
            username: "test".to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            phone: "+14155550000".to_string(),
            iat: 1234567890,
        };
        req.extensions_mut().insert(claims);

        let extracted = extract_claims(&req);
        assert!(extracted.is_some());
        assert_eq!(extracted.unwrap().username, "test");
    }
}

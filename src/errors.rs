//! Error taxonomy and the single HTTP status mapping.
//!
//! Components fail fast with a typed kind; only this module decides what a
//! caller sees. `NotFound` deliberately covers both "no such row" and
//! "caller may not see this row" so responses never reveal whether a
//! message exists. Store detail goes to the log, never into a response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

#[derive(Debug)]
pub enum ApiError {
    /// Entity absent, or access disallowed and hidden as absence.
    NotFound,
    /// Bearer token failed signature or structural checks.
    InvalidToken,
    /// Credential missing or the caller is not the resource owner.
    Unauthorized,
    /// The store rejected a registration insert (e.g. duplicate username).
    /// Carries the store's native error text for logging only.
    Registration(String),
    /// Store connectivity or any other internal failure.
    Store(anyhow::Error),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::NotFound => write!(f, "not found"),
            ApiError::InvalidToken => write!(f, "invalid token"),
            ApiError::Unauthorized => write!(f, "unauthorized"),
            ApiError::Registration(detail) => write!(f, "registration failed: {}", detail),
            ApiError::Store(e) => write!(f, "store error: {}", e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not found"),
            ApiError::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid or missing token"),
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized"),
            ApiError::Registration(detail) => {
                warn!("Registration rejected by store: {}", detail);
                (StatusCode::BAD_REQUEST, "Registration failed")
            }
            ApiError::Store(e) => {
                error!("Store failure: {:#}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (status, message).into_response()
    }
}

impl From<rusqlite::Error> for ApiError {
    fn from(e: rusqlite::Error) -> Self {
        match e {
            rusqlite::Error::QueryReturnedNoRows => ApiError::NotFound,
            other => ApiError::Store(other.into()),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        ApiError::Store(e)
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(e: bcrypt::BcryptError) -> Self {
        ApiError::Store(e.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let not_found = ApiError::NotFound.into_response();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let invalid = ApiError::InvalidToken.into_response();
        assert_eq!(invalid.status(), StatusCode::UNAUTHORIZED);

        let unauthorized = ApiError::Unauthorized.into_response();
        assert_eq!(unauthorized.status(), StatusCode::UNAUTHORIZED);

        let registration = ApiError::Registration("UNIQUE constraint failed".into()).into_response();
        assert_eq!(registration.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_no_rows_maps_to_not_found() {
        let err: ApiError = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(matches!(err, ApiError::NotFound));
    }
}

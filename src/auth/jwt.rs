//! JWT Token Handler
//! Mission: Issue and decode signed identity tokens

use crate::auth::models::Claims;
use crate::errors::ApiError;
use crate::users::models::User;
use anyhow::{Context, Result};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use tracing::debug;

/// Token service holding the process-wide signing secret.
///
/// Tokens carry no expiry; the login contract predates expiring sessions
/// and decoding disables the `exp` checks accordingly.
pub struct TokenService {
    secret: String,
}

impl TokenService {
    pub fn new(secret: String) -> Self {
        Self { secret }
    }

    /// Sign a token for an authenticated user.
    ///
    /// Claims are a snapshot of the public profile plus `iat`; the stored
    /// password hash never enters the payload.
    pub fn issue(&self, user: &User) -> Result<String> {
        let claims = Claims {
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            phone: user.phone.clone(),
            iat: Utc::now().timestamp() as usize,
        };

        debug!("Issuing token for user {}", user.username);

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .context("Failed to sign token")
    }

    /// Verify signature and structure, returning the claims.
    pub fn decode(&self, token: &str) -> Result<Claims, ApiError> {
        let mut validation = Validation::default();
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let decoded = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map_err(|_| ApiError::InvalidToken)?;

        Ok(decoded.claims)
    }
}

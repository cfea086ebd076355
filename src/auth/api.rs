//! Authentication API Endpoints
//! Mission: Registration and login, each answering with a signed token

use crate::auth::models::{LoginRequest, TokenResponse};
use crate::errors::ApiError;
use crate::users::models::NewUser;
use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::{info, warn};

/// Register endpoint - POST /auth/register
///
/// Registers, logs the user in, and returns a token in one step.
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<NewUser>,
) -> Result<Json<TokenResponse>, ApiError> {
    let user = state.users.register(payload)?;

    let token = state.tokens.issue(&user)?;

    Ok(Json(TokenResponse { token }))
}

/// Login endpoint - POST /auth/login
///
/// Bad credentials answer the literal JSON `false` with a 200, never an
/// error; unknown usernames and wrong passwords are indistinguishable.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<Value>, ApiError> {
    info!("🔐 Login attempt: {}", payload.username);

    match state.users.authenticate(&payload.username, &payload.password)? {
        Some(user) => {
            let token = state.tokens.issue(&user)?;
            info!("✅ Login successful: {}", user.username);
            Ok(Json(json!({ "token": token })))
        }
        None => {
            warn!("❌ Failed login attempt: {}", payload.username);
            Ok(Json(Value::Bool(false)))
        }
    }
}

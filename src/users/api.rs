//! User API Endpoints
//! Mission: Directory listings and per-user message views

use crate::auth::models::Claims;
use crate::errors::ApiError;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde_json::{json, Value};

/// List all users - GET /users
pub async fn list_users(
    State(state): State<AppState>,
    Extension(_claims): Extension<Claims>,
) -> Result<Json<Value>, ApiError> {
    let users = state.users.all()?;
    Ok(Json(json!({ "users": users })))
}

/// Get one profile - GET /users/:username
pub async fn get_user(
    State(state): State<AppState>,
    Extension(_claims): Extension<Claims>,
    Path(username): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let user = state.users.get(&username)?;
    Ok(Json(json!({ "user": user })))
}

/// Inbox - GET /users/:username/to
///
/// Only the named user may read their own inbox. The path already names
/// the caller's claim, so a mismatch is a plain 401.
pub async fn messages_to_user(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(username): Path<String>,
) -> Result<Json<Value>, ApiError> {
    if claims.username != username {
        return Err(ApiError::Unauthorized);
    }

    let messages = state.users.messages_to(&username)?;
    Ok(Json(json!({ "messages": messages })))
}

/// Outbox - GET /users/:username/from
pub async fn messages_from_user(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(username): Path<String>,
) -> Result<Json<Value>, ApiError> {
    if claims.username != username {
        return Err(ApiError::Unauthorized);
    }

    let messages = state.users.messages_from(&username)?;
    Ok(Json(json!({ "messages": messages })))
}

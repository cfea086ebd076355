//! Message API Endpoints
//! Mission: Message access gated by the authenticated identity

use crate::auth::models::Claims;
use crate::errors::ApiError;
use crate::messages::models::SendMessageRequest;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde_json::{json, Value};

/// Message detail - GET /messages/:id
///
/// Only the sender or the recipient may view a message. Anyone else gets
/// the same 404 a nonexistent id would produce, so the response never
/// confirms the message exists.
pub async fn get_message(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let message = state.messages.get(id)?;

    if message.from_user.username != claims.username
        && message.to_user.username != claims.username
    {
        return Err(ApiError::NotFound);
    }

    Ok(Json(json!({ "message": message })))
}

/// Send - POST /messages
///
/// The recipient is resolved through the user directory before anything
/// is written; an unknown recipient persists no row.
pub async fn post_message(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<SendMessageRequest>,
) -> Result<Json<Value>, ApiError> {
    state.users.get(&payload.to_username)?;

    let message = state
        .messages
        .create(&claims.username, &payload.to_username, &payload.body)?;

    Ok(Json(json!({ "message": message })))
}

/// Mark read - POST /messages/:id/read
///
/// Recipient only; violations answer 404, same as a missing id.
pub async fn mark_message_read(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let message = state.messages.get(id)?;

    if message.to_user.username != claims.username {
        return Err(ApiError::NotFound);
    }

    let receipt = state.messages.mark_read(id)?;

    Ok(Json(json!({ "message": receipt })))
}

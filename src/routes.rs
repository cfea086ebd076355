//! Router assembly.
//!
//! Three routers merged into one app: public (health), auth
//! (register/login, no token required), and the protected surface behind
//! the shared authentication middleware.

use crate::auth::{api as auth_api, auth_middleware};
use crate::messages::api as messages_api;
use crate::middleware::request_logging;
use crate::users::api as users_api;
use crate::AppState;
use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    let auth_routes = Router::new()
        .route("/auth/register", post(auth_api::register))
        .route("/auth/login", post(auth_api::login))
        .with_state(state.clone());

    let protected_routes = Router::new()
        .route("/users", get(users_api::list_users))
        .route("/users/:username", get(users_api::get_user))
        .route("/users/:username/to", get(users_api::messages_to_user))
        .route("/users/:username/from", get(users_api::messages_from_user))
        .route("/messages/:id", get(messages_api::get_message))
        .route("/messages", post(messages_api::post_message))
        .route("/messages/:id/read", post(messages_api::mark_message_read))
        .route_layer(middleware::from_fn_with_state(
            state.tokens.clone(),
            auth_middleware,
        ))
        .with_state(state);

    let public_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .merge(auth_routes)
        .layer(middleware::from_fn(request_logging))
        .layer(CorsLayer::permissive())
}

/// Liveness probe - GET /health
async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok", "service": "messagely-backend" }))
}

//! Request logging middleware.
//!
//! One line per request: method, path, status, latency. Failures are
//! logged at WARN so they stand out under the default filter.

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{info, warn};

pub async fn request_logging(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    // Health probes would drown everything else out.
    if path == "/health" {
        return next.run(request).await;
    }

    let start = Instant::now();
    let response = next.run(request).await;

    let status = response.status();
    let latency_ms = start.elapsed().as_millis();

    if status.is_server_error() {
        warn!(%method, %path, status = status.as_u16(), latency_ms, "Request failed");
    } else {
        info!(%method, %path, status = status.as_u16(), latency_ms, "Request completed");
    }

    response
}

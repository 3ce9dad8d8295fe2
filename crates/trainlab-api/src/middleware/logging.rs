//! Request logging middleware

use std::time::Instant;

use axum::{extract::Request, extract::State, middleware::Next, response::Response};

use crate::state::AppState;

/// Log every request with its outcome, warning when it exceeds the
/// configured slow-request threshold
pub async fn logging_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    let elapsed = started.elapsed();
    let status = response.status().as_u16();
    let elapsed_ms = elapsed.as_millis() as u64;

    if elapsed > state.slow_request_threshold {
        tracing::warn!(%method, %path, status, elapsed_ms, "slow request");
    } else if response.status().is_server_error() {
        tracing::error!(%method, %path, status, elapsed_ms, "request failed");
    } else {
        tracing::info!(%method, %path, status, elapsed_ms, "request handled");
    }

    response
}

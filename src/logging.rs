//! Middleware for logging requests and responses.

use axum::{extract::Request, middleware::Next, response::Response};

/// The maximum number of body bytes to log at the `info` level.
///
/// Longer bodies are truncated and logged in full at the `debug` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If a body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is
/// truncated and logged at the `debug` level.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let body_bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    let body_text = String::from_utf8_lossy(&body_bytes).to_string();

    log_body(
        &format!("Received request: {} {}", parts.method, parts.uri),
        &body_text,
    );

    let request = Request::from_parts(parts, body_text.into());
    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let body_bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    let body_text = String::from_utf8_lossy(&body_bytes).to_string();

    log_body(
        &format!("Sending response: {}", parts.status),
        &body_text,
    );

    Response::from_parts(parts, body_text.into())
}

fn log_body(heading: &str, body: &str) {
    if body.is_empty() {
        tracing::info!("{heading}");
    } else if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!("{heading}\nbody: {}...", &body[..LOG_BODY_LENGTH_LIMIT]);
        tracing::debug!("Full body: {body:?}");
    } else {
        tracing::info!("{heading}\nbody: {body:?}");
    }
}

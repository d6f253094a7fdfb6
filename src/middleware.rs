//! Request ID middleware for correlating logs with requests.
//!
//! Each incoming request gets a UUID v4 and a tracing span that wraps its
//! entire lifecycle, so every log line emitted while handling the request
//! carries the request_id field.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

/// Middleware that generates a request ID and creates a request span.
///
/// Applied as the outermost layer so the span covers all other middleware
/// and the handler itself.
pub async fn request_id_layer(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %path,
    );

    let start = Instant::now();

    async move {
        let response = next.run(request).await;

        tracing::info!(
            status = response.status().as_u16(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Request completed"
        );

        response
    }
    .instrument(span)
    .await
}

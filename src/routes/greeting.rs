//! Handler for the root greeting endpoint.

use axum::response::IntoResponse;
use http::header::{HeaderValue, CONTENT_TYPE};
use tracing::instrument;

use crate::config::GREETING;

/// `GET /` handler.
///
/// Returns the fixed greeting with an explicit UTF-8 plain-text content type.
/// No inputs, no side effects; every call produces the identical response.
#[instrument(name = "greeting::index")]
pub async fn index() -> impl IntoResponse {
    (
        [(
            CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=UTF-8"),
        )],
        GREETING,
    )
}

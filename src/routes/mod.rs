//! HTTP route handlers.
//!
//! Routes are registered explicitly, with per-route Cache-Control headers:
//! the greeting is constant content and caches aggressively, while health
//! responses are never cached so probes always see a fresh answer.
//!
//! Request tracing is enabled via middleware that generates a unique request
//! ID for each incoming request, allowing correlation of all logs within a
//! request.

pub mod greeting;
pub mod health;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_GREETING, CACHE_CONTROL_HEALTH};
use crate::middleware::request_id_layer;

/// Creates the Axum router with all routes and cache headers.
///
/// Unknown paths fall through to the router's default 404; a non-GET method
/// on a known path yields 405 from the method router.
pub fn create_router() -> Router {
    // Greeting - immutable content, long cache
    let greeting_routes = Router::new().route("/", get(greeting::index)).layer(
        SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_GREETING),
        ),
    );

    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new().route("/health", get(health::health)).layer(
        SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTH),
        ),
    );

    Router::new()
        .merge(greeting_routes)
        .merge(health_routes)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}

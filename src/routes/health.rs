//! Health check endpoint for container orchestration.
//!
//! Serves the liveness and readiness probes configured in the deployment
//! manifest. The router is only reachable once startup has completed, so a
//! 200 here means the process is ready for traffic.

/// Health check handler.
///
/// Returns a plain 200 "ok" as soon as the server is accepting connections.
pub async fn health() -> &'static str {
    "ok"
}

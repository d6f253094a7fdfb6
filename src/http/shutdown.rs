//! Graceful shutdown signal handling.
//!
//! On SIGTERM or SIGINT the server stops accepting new connections, waits
//! for in-flight requests to complete, and then exits.

/// Resolves when SIGTERM or SIGINT is received.
///
/// Passed to `axum::serve(..).with_graceful_shutdown` so the server drains
/// existing connections before exiting.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

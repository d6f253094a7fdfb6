//! HTTP server startup and shutdown.
//!
//! Plain HTTP only; TLS termination is left to the deployment environment
//! (the Kubernetes Service in front of this process). Includes graceful
//! shutdown on SIGTERM/SIGINT with connection draining.

mod server;
mod shutdown;

pub use server::start_server;

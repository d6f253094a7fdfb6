//! Greeter: a single-endpoint greeting HTTP service.
//!
//! This is the application entry point. It loads configuration from a TOML
//! file, initializes tracing, builds the component registry and runs the
//! startup inspector, sets up the Axum router, and starts the HTTP server.

mod config;
mod http;
mod middleware;
mod registry;
mod routes;

use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use registry::ComponentRegistry;
use routes::create_router;

/// Greeter: a single-endpoint greeting HTTP service
#[derive(Parser, Debug)]
#[command(name = "greeter", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Port to listen on (overrides PORT and the config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level filter (e.g., "greeter=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration; a missing file at the default path means defaults
    let app_config = AppConfig::load_or_default(&args.config)?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    // Logs go to stderr; stdout is reserved for the startup inspection report
    let subscriber =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    match app_config.logging.format.as_str() {
        "json" => subscriber
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
        _ => subscriber
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }

    tracing::info!("Loaded configuration");

    // Build the component registry: every component wired below, plus any
    // extra names supplied by the config file
    let mut components = ComponentRegistry::new();
    components.register("app_config");
    components.register("greeting_handler");
    components.register("health_handler");
    components.register("http_server");
    components.register("request_id_middleware");
    components.extend(app_config.registry.components.iter().cloned());

    // Startup inspection runs exactly once, before the server starts
    // accepting connections
    components.inspect(&mut std::io::stdout().lock())?;
    tracing::info!(count = components.len(), "Inspected registered components");

    // Create router
    let app = create_router();

    // Start server
    let port = app_config.resolve_port(args.port);
    let addr: SocketAddr = format!("{}:{}", app_config.http.host, port).parse()?;
    http::start_server(app, addr).await?;

    Ok(())
}

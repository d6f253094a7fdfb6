//! Configuration loading and constants.
//!
//! Loads application configuration from a TOML file and defines the fixed
//! response strings, HTTP cache TTLs, default paths, and logging defaults.
//! `AppConfig` is the root configuration struct containing all settings.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// Fixed Response Strings
// =============================================================================

/// Body returned by `GET /`.
pub const GREETING: &str = "Greetings from Spring Boot!";

/// Header line printed by the startup inspector before the component names.
pub const INSPECT_HEADER: &str = "Let's inspect the beans provided by Spring Boot:";

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// These constants control Cache-Control headers for upstream caches and
// proxies. The greeting never changes, so it gets a long TTL with the
// immutable hint. Health responses must never be cached: orchestrator probes
// need a fresh answer every time.

/// Greeting response - constant content, cache aggressively
pub const HTTP_CACHE_GREETING_MAX_AGE: u32 = 3600;

// Pre-formatted Cache-Control header values (compile-time string concatenation)
pub const CACHE_CONTROL_GREETING: &str = formatcp!(
    "public, max-age={}, immutable",
    HTTP_CACHE_GREETING_MAX_AGE
);

pub const CACHE_CONTROL_HEALTH: &str = "no-store";

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "greeter=debug,tower_http=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Environment variable consulted for the listen port
pub const PORT_ENV_VAR: &str = "PORT";

/// Default listen port, matching the deployment manifest's containerPort
pub const DEFAULT_HTTP_PORT: u16 = 3000;

/// Default bind address
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Component registry configuration
    #[serde(default)]
    pub registry: RegistryConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }
}

/// Component registry configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistryConfig {
    /// Extra component names to register alongside the built-in components
    #[serde(default)]
    pub components: Vec<String>,
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;

        // Validate: log format must be a known value
        match config.logging.format.as_str() {
            "text" | "json" => {}
            other => {
                return Err(ConfigError::Validation(format!(
                    "Unknown logging.format '{}'. Expected \"text\" or \"json\"",
                    other
                )))
            }
        }

        Ok(config)
    }

    /// Load configuration from `path`, falling back to built-in defaults when
    /// the default config file is absent. An explicitly-given path that does
    /// not exist is still an error.
    pub fn load_or_default(path: &str) -> Result<Self, ConfigError> {
        if path == DEFAULT_CONFIG_PATH && !Path::new(path).exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Resolve the listen port with precedence: CLI flag, then the PORT
    /// environment variable, then the config file.
    pub fn resolve_port(&self, flag: Option<u16>) -> u16 {
        if let Some(port) = flag {
            return port;
        }
        if let Ok(value) = std::env::var(PORT_ENV_VAR) {
            match value.parse() {
                Ok(port) => return port,
                Err(_) => {
                    tracing::warn!(
                        value = %value,
                        "Ignoring unparseable {} environment variable",
                        PORT_ENV_VAR
                    );
                }
            }
        }
        self.http.port
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}

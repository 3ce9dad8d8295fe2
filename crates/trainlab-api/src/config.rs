//! Service configuration
//!
//! Built-in defaults, overridden by an optional TOML file, overridden by
//! `TRAINLAB_`-prefixed environment variables (`__` separates nested keys,
//! e.g. `TRAINLAB_SERVER__PORT=9000`).

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use trainlab_domain::training::DEFAULT_MAX_TEXT_LENGTH;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "TRAINLAB";

/// Secret used when none is configured; only good for local development
pub const DEV_JWT_SECRET: &str = "trainlab-development-secret";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// Values loaded but inconsistent
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Top-level service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// `[server]`
    pub server: ServerConfig,
    /// `[auth]`
    pub auth: AuthConfig,
    /// `[training]`
    pub training: TrainingConfig,
    /// `[logging]`
    pub logging: LoggingConfig,
}

/// Listening address
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// TCP port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

/// Token verification settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HMAC secret for HS256 tokens
    pub jwt_secret: String,
    /// Required `iss` claim, if any
    pub issuer: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: DEV_JWT_SECRET.to_string(),
            issuer: None,
        }
    }
}

/// Training data limits
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Longest accepted `data`, in characters
    pub max_text_length: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            max_text_length: DEFAULT_MAX_TEXT_LENGTH,
        }
    }
}

/// Log output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
    /// Requests slower than this are logged as warnings
    pub slow_request_ms: u64,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            slow_request_ms: 100,
        }
    }
}

impl LoggingConfig {
    /// `slow_request_ms` as a [`Duration`]
    pub fn slow_request_threshold(&self) -> Duration {
        Duration::from_millis(self.slow_request_ms)
    }
}

impl ApiConfig {
    /// Load configuration from defaults, `path` (if it exists) and the environment
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(false));
        }
        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let api_config: ApiConfig = config.try_deserialize()?;
        api_config.validate()?;
        Ok(api_config)
    }

    /// Reject settings the service cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port must be greater than 0".to_string(),
            ));
        }
        if self.auth.jwt_secret.trim().is_empty() {
            return Err(ConfigError::Validation(
                "auth.jwt_secret cannot be empty".to_string(),
            ));
        }
        if self.training.max_text_length == 0 {
            return Err(ConfigError::Validation(
                "training.max_text_length must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Socket address to bind
    pub fn bind_address(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| ConfigError::Validation(format!("invalid server address: {}", e)))
    }

    /// Whether the built-in development secret is still in use
    pub fn uses_dev_secret(&self) -> bool {
        self.auth.jwt_secret == DEV_JWT_SECRET
    }
}

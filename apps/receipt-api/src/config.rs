//! Receipt API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use serde::{Deserialize, Serialize};
use std::env;
use std::net::SocketAddr;

/// Receipt API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Interface the HTTP server binds to
    pub host: String,

    /// HTTP server port
    pub port: u16,

    /// Largest accepted request body in bytes (default: 1MB)
    pub max_body_bytes: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
            max_body_bytes: 1_048_576,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn load_from(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = ApiConfig::default();

        let config = ApiConfig {
            host: lookup("HTTP_HOST").unwrap_or(defaults.host),

            port: match lookup("HTTP_PORT") {
                Some(value) => value
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("HTTP_PORT".to_string()))?,
                None => defaults.port,
            },

            max_body_bytes: match lookup("MAX_BODY_BYTES") {
                Some(value) => value
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("MAX_BODY_BYTES".to_string()))?,
                None => defaults.max_body_bytes,
            },
        };

        if config.max_body_bytes == 0 {
            return Err(ConfigError::InvalidValue("MAX_BODY_BYTES".to_string()));
        }

        Ok(config)
    }

    /// Socket address the server listens on.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidValue("HTTP_HOST".to_string()))
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

//! Environment based configuration.

use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

/// Address the API listens on when `BIND_ADDR` is not set.
pub static DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection URL of the relational store (`DATABASE_URL`)
    pub database_url: String,
    /// Socket address the HTTP server binds to (`BIND_ADDR`)
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` is not set
    /// - `Err(ConfigError::InvalidEnvValue)` - `BIND_ADDR` is not a socket address
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration using the provided variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: "BIND_ADDR".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url,
            bind_addr,
        })
    }
}

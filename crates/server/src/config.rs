//! # Application Configuration
//!
//! This module defines the configuration structure for the `vibecheck-server` and
//! provides the logic for loading it from environment variables. The result is an
//! immutable value built once at startup and handed to the application state;
//! request handlers never read the process environment themselves.

use config::{Config as ConfigBuilder, Environment};
use serde::Deserialize;
use std::fmt;
use vibecheck::constants::DEFAULT_PERSPECTIVE_API_URL;

/// A custom error type for configuration issues.
#[derive(Debug)]
pub enum ConfigError {
    /// Indicates an error from the underlying `config` crate.
    General(String),
    /// Indicates a required environment variable is unset or blank.
    Missing(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::General(msg) => write!(f, "Configuration error: {msg}"),
            ConfigError::Missing(key) => {
                write!(f, "Missing required environment variable: {key}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::General(err.to_string())
    }
}

/// The root configuration structure.
#[derive(Deserialize, Clone)]
pub struct AppConfig {
    /// The port for the server to listen on. Loaded from `PORT` env var.
    #[serde(default = "default_port")]
    pub port: u16,
    /// The address to bind to. Loaded from `HOST` env var.
    #[serde(default = "default_host")]
    pub host: String,
    /// The Perspective API key. Loaded from `PERSPECTIVE_API_KEY` env var.
    #[serde(default)]
    pub perspective_api_key: String,
    /// The Perspective `comments:analyze` endpoint. Loaded from `PERSPECTIVE_API_URL` env var.
    #[serde(default = "default_perspective_api_url")]
    pub perspective_api_url: String,
    /// How long to wait for Perspective before giving up.
    /// Loaded from `UPSTREAM_TIMEOUT_SECS` env var.
    #[serde(default = "default_upstream_timeout_secs")]
    pub upstream_timeout_secs: u64,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("port", &self.port)
            .field("host", &self.host)
            .field("perspective_api_key", &"<redacted>")
            .field("perspective_api_url", &self.perspective_api_url)
            .field("upstream_timeout_secs", &self.upstream_timeout_secs)
            .finish()
    }
}

/// Provides a default value for the `port` field if not set in the environment.
fn default_port() -> u16 {
    3000
}

/// Provides a default value for the `host` field if not set in the environment.
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_perspective_api_url() -> String {
    DEFAULT_PERSPECTIVE_API_URL.to_string()
}

fn default_upstream_timeout_secs() -> u64 {
    5
}

/// Loads the application configuration from environment variables.
///
/// - `PERSPECTIVE_API_KEY` is required; a blank value counts as unset.
/// - `PORT`, `HOST`, `PERSPECTIVE_API_URL` and `UPSTREAM_TIMEOUT_SECS` fall back to defaults.
pub fn get_config() -> Result<AppConfig, ConfigError> {
    let settings = ConfigBuilder::builder()
        .add_source(Environment::default().try_parsing(true))
        .build()?;

    let config: AppConfig = settings.try_deserialize()?;

    if config.perspective_api_key.trim().is_empty() {
        return Err(ConfigError::Missing("PERSPECTIVE_API_KEY".to_string()));
    }
    if config.upstream_timeout_secs == 0 {
        return Err(ConfigError::General(
            "UPSTREAM_TIMEOUT_SECS must be greater than zero".to_string(),
        ));
    }

    Ok(config)
}

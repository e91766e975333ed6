//! Server configuration loaded from the environment.

use std::{fmt::Display, net::SocketAddr, str::FromStr};

use axum::http::HeaderValue;
use dioxus_logger::tracing::Level;

use crate::server::error::config::ConfigError;

static DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";
static DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
static DEFAULT_LOG_LEVEL: &str = "info";

/// Runtime settings of the GradLink server
pub struct Config {
    /// Connection string of the MySQL database
    pub database_url: String,
    /// Socket address the HTTP listener binds to
    pub bind_address: SocketAddr,
    /// Origin of the single page application allowed by CORS
    pub cors_origin: HeaderValue,
    /// Minimum level emitted by the logger
    pub log_level: Level,
}

impl Config {
    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration using the provided variable lookup
    ///
    /// # Returns
    /// - `Ok(Config)`: All required variables present and every value parsed
    /// - `Err(ConfigError::MissingEnvVar)`: `DATABASE_URL` is not set
    /// - `Err(ConfigError::InvalidEnvValue)`: A variable is set to a value that fails to parse
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let cors_origin = lookup("CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string());
        let cors_origin =
            HeaderValue::from_str(&cors_origin).map_err(|e| ConfigError::InvalidEnvValue {
                var: "CORS_ORIGIN".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url,
            bind_address: parse_or_default(&lookup, "BIND_ADDRESS", DEFAULT_BIND_ADDRESS)?,
            cors_origin,
            log_level: parse_or_default(&lookup, "LOG_LEVEL", DEFAULT_LOG_LEVEL)?,
        })
    }
}

fn parse_or_default<F, T>(lookup: &F, var: &str, default: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    let value = lookup(var).unwrap_or_else(|| default.to_string());

    value.parse().map_err(|e: T::Err| ConfigError::InvalidEnvValue {
        var: var.to_string(),
        reason: e.to_string(),
    })
}

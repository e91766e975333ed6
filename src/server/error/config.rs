//! Startup configuration errors.
//!
//! Raised while reading the GradLink environment (`DATABASE_URL`, `BIND_ADDRESS`,
//! `CORS_ORIGIN`, `LOG_LEVEL`). These normally abort startup before the server binds;
//! should one reach a handler it is reported as a 500.

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Errors raised while loading [`Config`](crate::server::config::Config).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required variable such as `DATABASE_URL` is unset or blank.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// A variable is set but cannot be parsed, e.g. a malformed bind address.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// Name of the offending variable
        var: String,
        /// Parser error for the value
        reason: String,
    },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}

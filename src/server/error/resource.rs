//! Errors for missing or conflicting stored resources.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use sea_orm::{DbErr, SqlErr};

use crate::{model::api::ErrorDto, server::error::Error};

/// Lookup failures and uniqueness conflicts on stored rows.
#[derive(thiserror::Error, Debug)]
pub enum ResourceError {
    /// No row with the given identifier, reported as 404.
    #[error("{resource} {id} not found")]
    NotFound {
        /// Display name of the resource, e.g. `Project`
        resource: &'static str,
        /// Identifier that was looked up
        id: String,
    },
    /// The row would duplicate an existing one, reported as 409.
    #[error("{0}")]
    Conflict(String),
}

impl ResourceError {
    /// Shorthand for [`ResourceError::NotFound`]
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}

/// Map a unique constraint violation raised by an insert to [`ResourceError::Conflict`]
///
/// Services check for duplicates before inserting; this covers the insert that loses a
/// race against an identical request. Any other database error is passed through.
pub fn conflict_on_unique(err: DbErr, message: &str) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            ResourceError::Conflict(message.to_string()).into()
        }
        _ => err.into(),
    }
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotFound { resource, .. } => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: format!("{} not found", resource),
                }),
            )
                .into_response(),
            Self::Conflict(message) => {
                (StatusCode::CONFLICT, Json(ErrorDto { error: message })).into_response()
            }
        }
    }
}

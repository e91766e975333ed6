//! Request validation errors.
//!
//! Every variant maps to a 400 Bad Request with a short static message. The full
//! error, including the offending value, is only written to the debug log.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Rejected request input, always reported as 400 Bad Request.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A required field is absent or blank.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    /// A required query parameter is absent.
    #[error("Missing query parameter: {0}")]
    MissingFilter(&'static str),
    /// A status literal outside the allow-list of its entity.
    #[error("Invalid status value: {0:?}")]
    InvalidStatus(String),
    /// A user type literal that is unknown or not allowed for the operation.
    #[error("Invalid user type: {0:?}")]
    InvalidUserType(String),
    /// A field value outside its permitted range.
    #[error("Invalid value for field: {0}")]
    InvalidValue(&'static str),
    /// The JSON body could not be parsed into the expected shape.
    #[error("Malformed request body: {0}")]
    MalformedBody(String),
    /// Application sent to a job that is no longer active.
    #[error("Job {0} is closed and no longer accepts applications")]
    JobClosed(i32),
    /// Registration for an event that has reached its capacity.
    #[error("Event {0} has reached its capacity")]
    EventFull(i32),
}

impl ValidationError {
    fn client_message(&self) -> String {
        match self {
            Self::MissingField(field) => format!("Missing required field: {}", field),
            Self::MissingFilter(param) => format!("Missing query parameter: {}", param),
            Self::InvalidStatus(_) => "Invalid status".to_string(),
            Self::InvalidUserType(_) => "Invalid user type".to_string(),
            Self::InvalidValue(field) => format!("Invalid value for {}", field),
            Self::MalformedBody(_) => "Invalid request body".to_string(),
            Self::JobClosed(_) => "This job is no longer accepting applications".to_string(),
            Self::EventFull(_) => "This event is full".to_string(),
        }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Validation error: {}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.client_message(),
            }),
        )
            .into_response()
    }
}

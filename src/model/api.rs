use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response for operations that only report an outcome
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

/// The response when a resource is created
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreatedDto {
    pub message: String,
    /// ID of the newly created row
    pub id: i32,
}

/// Body of every status transition endpoint
#[derive(Serialize, Deserialize, ToSchema)]
pub struct StatusUpdateDto {
    pub status: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub status: String,
}

/// Filter by a single user ID
#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct UserIdQuery {
    pub user_id: Option<String>,
}

//! Liveness endpoint.

use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::HealthDto;

/// OpenAPI tag for the health endpoint
pub static HEALTH_TAG: &str = "health";

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Server is running", body = HealthDto)
    ),
)]
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthDto {
            status: "ok".to_string(),
        }),
    )
}

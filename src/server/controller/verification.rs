//! Identity verification endpoints, including admin review.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto, StatusUpdateDto},
        verification::{
            VerificationListDto, VerificationListQuery, VerificationStatusDto, VerifyUserDto,
            VerifyUserResponseDto,
        },
    },
    server::{
        error::Error, model::app::AppState, service::verification::VerificationService,
        util::validation::require_filter,
    },
};

/// OpenAPI tag for verification endpoints
pub static VERIFICATION_TAG: &str = "verification";

/// Submit identity details for automatic verification
///
/// A submission matching an existing record by user ID, student ID or official email is
/// refused with `success: false` and the status of that record.
#[utoipa::path(
    post,
    path = "/verify-user",
    tag = VERIFICATION_TAG,
    request_body = VerifyUserDto,
    responses(
        (status = 200, description = "Verification outcome", body = VerifyUserResponseDto),
        (status = 400, description = "Missing field or invalid user type", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify_user(
    State(state): State<AppState>,
    payload: Result<Json<VerifyUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload?;

    let response = VerificationService::new(&state.db)
        .verify_user(payload)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Get the verification status of a user
#[utoipa::path(
    get,
    path = "/verification-status/{userId}",
    tag = VERIFICATION_TAG,
    params(
        ("userId" = String, Path, description = "Identity provider user ID")
    ),
    responses(
        (status = 200, description = "Verification status", body = VerificationStatusDto),
        (status = 404, description = "No verification record for user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_verification_status(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let status = VerificationService::new(&state.db)
        .get_status(&user_id)
        .await?;

    Ok((StatusCode::OK, Json(status)))
}

/// List identity records of one user type for review
#[utoipa::path(
    get,
    path = "/admin/verifications",
    tag = VERIFICATION_TAG,
    params(VerificationListQuery),
    responses(
        (status = 200, description = "Identity records", body = VerificationListDto),
        (status = 400, description = "Missing or invalid user type or status", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_verifications(
    State(state): State<AppState>,
    Query(query): Query<VerificationListQuery>,
) -> Result<impl IntoResponse, Error> {
    let user_type = require_filter("userType", query.user_type.as_deref())?;

    let verifications = VerificationService::new(&state.db)
        .list(user_type, query.status.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(VerificationListDto { verifications })))
}

/// Set the verification status of a user's identity record
#[utoipa::path(
    put,
    path = "/admin/verifications/{userType}/{userId}",
    tag = VERIFICATION_TAG,
    params(
        ("userType" = String, Path, description = "Either `student` or `alumni`"),
        ("userId" = String, Path, description = "Identity provider user ID")
    ),
    request_body = StatusUpdateDto,
    responses(
        (status = 200, description = "Status updated", body = MessageDto),
        (status = 400, description = "Invalid user type or status", body = ErrorDto),
        (status = 404, description = "No verification record for user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_verification_status(
    State(state): State<AppState>,
    Path((user_type, user_id)): Path<(String, String)>,
    payload: Result<Json<StatusUpdateDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload?;

    VerificationService::new(&state.db)
        .set_status(&user_type, &user_id, &payload.status)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Verification status updated successfully".to_string(),
        }),
    ))
}

//! Collaboration request endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{CreatedDto, ErrorDto, MessageDto, StatusUpdateDto, UserIdQuery},
        collaboration::{CollaborationListDto, CreateCollaborationRequestDto},
    },
    server::{
        error::Error, model::app::AppState, service::collaboration::CollaborationService,
        util::validation::require_filter,
    },
};

/// OpenAPI tag for collaboration request endpoints
pub static COLLABORATION_TAG: &str = "collaboration";

/// Ask to join a project
///
/// The request is addressed to the project owner when `receiverUserId` is omitted.
#[utoipa::path(
    post,
    path = "/collaboration-requests",
    tag = COLLABORATION_TAG,
    request_body = CreateCollaborationRequestDto,
    responses(
        (status = 201, description = "Collaboration request sent", body = CreatedDto),
        (status = 400, description = "Missing field or malformed body", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_collaboration_request(
    State(state): State<AppState>,
    payload: Result<Json<CreateCollaborationRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload?;

    let request = CollaborationService::new(&state.db)
        .create_request(payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedDto {
            message: "Collaboration request sent successfully".to_string(),
            id: request.id,
        }),
    ))
}

/// List collaboration requests received by a user
#[utoipa::path(
    get,
    path = "/collaboration-requests",
    tag = COLLABORATION_TAG,
    params(UserIdQuery),
    responses(
        (status = 200, description = "Received requests, newest first", body = CollaborationListDto),
        (status = 400, description = "Missing userId", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_received_collaboration_requests(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_filter("userId", query.user_id.as_deref())?;

    let collaborations = CollaborationService::new(&state.db)
        .list_received(user_id)
        .await?;

    Ok((StatusCode::OK, Json(CollaborationListDto { collaborations })))
}

/// List collaboration requests sent by a user
#[utoipa::path(
    get,
    path = "/collaboration-requests/sent",
    tag = COLLABORATION_TAG,
    params(UserIdQuery),
    responses(
        (status = 200, description = "Sent requests, newest first", body = CollaborationListDto),
        (status = 400, description = "Missing userId", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_sent_collaboration_requests(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_filter("userId", query.user_id.as_deref())?;

    let collaborations = CollaborationService::new(&state.db)
        .list_sent(user_id)
        .await?;

    Ok((StatusCode::OK, Json(CollaborationListDto { collaborations })))
}

/// Accept or reject a collaboration request
#[utoipa::path(
    put,
    path = "/collaboration-requests/{id}/status",
    tag = COLLABORATION_TAG,
    params(
        ("id" = i32, Path, description = "Collaboration request ID")
    ),
    request_body = StatusUpdateDto,
    responses(
        (status = 200, description = "Status updated", body = MessageDto),
        (status = 400, description = "Invalid status", body = ErrorDto),
        (status = 404, description = "Collaboration request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_collaboration_request_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<StatusUpdateDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload?;

    CollaborationService::new(&state.db)
        .update_status(id, &payload.status)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Collaboration request status updated successfully".to_string(),
        }),
    ))
}

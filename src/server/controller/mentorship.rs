//! Mentorship offering and mentorship request endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{CreatedDto, ErrorDto, MessageDto, StatusUpdateDto},
        mentorship::{
            CreateMentorshipDto, CreateMentorshipRequestDto, MentorshipDto, MentorshipListDto,
            MentorshipQuery, MentorshipRequestListDto, MentorshipRequestQuery,
        },
    },
    server::{error::Error, model::app::AppState, service::mentorship::MentorshipService},
};

/// OpenAPI tag for mentorship endpoints
pub static MENTORSHIP_TAG: &str = "mentorship";

/// Offer a mentorship
#[utoipa::path(
    post,
    path = "/mentorships",
    tag = MENTORSHIP_TAG,
    request_body = CreateMentorshipDto,
    responses(
        (status = 201, description = "Mentorship created", body = CreatedDto),
        (status = 400, description = "Missing field, negative price or no mentee slots", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_mentorship(
    State(state): State<AppState>,
    payload: Result<Json<CreateMentorshipDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload?;

    let mentorship = MentorshipService::new(&state.db)
        .create_mentorship(payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedDto {
            message: "Mentorship created successfully".to_string(),
            id: mentorship.id,
        }),
    ))
}

/// List mentorship offerings
#[utoipa::path(
    get,
    path = "/mentorships",
    tag = MENTORSHIP_TAG,
    params(MentorshipQuery),
    responses(
        (status = 200, description = "Mentorship offerings, newest first", body = MentorshipListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_mentorships(
    State(state): State<AppState>,
    Query(query): Query<MentorshipQuery>,
) -> Result<impl IntoResponse, Error> {
    let mentorships = MentorshipService::new(&state.db)
        .list_mentorships(query.creator_id.as_deref())
        .await?;

    Ok((
        StatusCode::OK,
        Json(MentorshipListDto {
            mentorships: mentorships.into_iter().map(MentorshipDto::from).collect(),
        }),
    ))
}

/// Request mentorship
///
/// The request is addressed to the offering creator when `mentorId` is omitted.
#[utoipa::path(
    post,
    path = "/mentorship-requests",
    tag = MENTORSHIP_TAG,
    request_body = CreateMentorshipRequestDto,
    responses(
        (status = 201, description = "Mentorship request sent", body = CreatedDto),
        (status = 400, description = "Missing field or malformed body", body = ErrorDto),
        (status = 404, description = "Mentorship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_mentorship_request(
    State(state): State<AppState>,
    payload: Result<Json<CreateMentorshipRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload?;

    let request = MentorshipService::new(&state.db)
        .create_request(payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedDto {
            message: "Mentorship request sent successfully".to_string(),
            id: request.id,
        }),
    ))
}

/// List mentorship requests received by a mentor or sent by a mentee
#[utoipa::path(
    get,
    path = "/mentorship-requests",
    tag = MENTORSHIP_TAG,
    params(MentorshipRequestQuery),
    responses(
        (status = 200, description = "Requests with offering titles, newest first", body = MentorshipRequestListDto),
        (status = 400, description = "Neither mentorId nor senderId provided", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_mentorship_requests(
    State(state): State<AppState>,
    Query(query): Query<MentorshipRequestQuery>,
) -> Result<impl IntoResponse, Error> {
    let requests = MentorshipService::new(&state.db)
        .list_requests(query.mentor_id.as_deref(), query.sender_id.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(MentorshipRequestListDto { requests })))
}

/// Accept or reject a mentorship request
#[utoipa::path(
    put,
    path = "/mentorship-requests/{id}/status",
    tag = MENTORSHIP_TAG,
    params(
        ("id" = i32, Path, description = "Mentorship request ID")
    ),
    request_body = StatusUpdateDto,
    responses(
        (status = 200, description = "Status updated", body = MessageDto),
        (status = 400, description = "Invalid status", body = ErrorDto),
        (status = 404, description = "Mentorship request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_mentorship_request_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<StatusUpdateDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload?;

    MentorshipService::new(&state.db)
        .update_request_status(id, &payload.status)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Mentorship request status updated successfully".to_string(),
        }),
    ))
}

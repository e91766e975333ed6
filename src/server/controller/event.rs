//! Event and event registration endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{CreatedDto, ErrorDto},
        event::{
            CreateEventDto, CreateEventRegistrationDto, EventDto, EventListDto, EventQuery,
            EventRegistrationDto, EventRegistrationListDto,
        },
    },
    server::{error::Error, model::app::AppState, service::event::EventService},
};

/// OpenAPI tag for event endpoints
pub static EVENT_TAG: &str = "event";

/// Create an event
#[utoipa::path(
    post,
    path = "/events",
    tag = EVENT_TAG,
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Event created", body = CreatedDto),
        (status = 400, description = "Missing field or invalid capacity", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<CreateEventDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload?;

    let event = EventService::new(&state.db).create_event(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedDto {
            message: "Event created successfully".to_string(),
            id: event.id,
        }),
    ))
}

/// List events ordered by date
#[utoipa::path(
    get,
    path = "/events",
    tag = EVENT_TAG,
    params(EventQuery),
    responses(
        (status = 200, description = "Events in chronological order", body = EventListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<EventQuery>,
) -> Result<impl IntoResponse, Error> {
    let events = EventService::new(&state.db)
        .list_events(query.creator_id.as_deref())
        .await?;

    Ok((
        StatusCode::OK,
        Json(EventListDto {
            events: events.into_iter().map(EventDto::from).collect(),
        }),
    ))
}

/// Register for an event
#[utoipa::path(
    post,
    path = "/events/{id}/registrations",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    request_body = CreateEventRegistrationDto,
    responses(
        (status = 201, description = "Registered", body = CreatedDto),
        (status = 400, description = "Missing userId or event full", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 409, description = "Already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_for_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<CreateEventRegistrationDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload?;

    let registration = EventService::new(&state.db)
        .register(id, payload.user_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedDto {
            message: "Registered for event successfully".to_string(),
            id: registration.id,
        }),
    ))
}

/// List registrations of an event
#[utoipa::path(
    get,
    path = "/events/{id}/registrations",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Registrations in the order they were made", body = EventRegistrationListDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_event_registrations(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let registrations = EventService::new(&state.db)
        .list_registrations(id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(EventRegistrationListDto {
            registrations: registrations
                .into_iter()
                .map(EventRegistrationDto::from)
                .collect(),
        }),
    ))
}

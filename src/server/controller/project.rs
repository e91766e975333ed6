//! Project endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{CreatedDto, ErrorDto, MessageDto, StatusUpdateDto, UserIdQuery},
        project::{CreateProjectDto, ProjectDto, ProjectListDto},
    },
    server::{error::Error, model::app::AppState, service::project::ProjectService},
};

/// OpenAPI tag for project endpoints
pub static PROJECT_TAG: &str = "project";

/// Create a project
#[utoipa::path(
    post,
    path = "/projects",
    tag = PROJECT_TAG,
    request_body = CreateProjectDto,
    responses(
        (status = 201, description = "Project created", body = CreatedDto),
        (status = 400, description = "Missing field or invalid status", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_project(
    State(state): State<AppState>,
    payload: Result<Json<CreateProjectDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload?;

    let project = ProjectService::new(&state.db)
        .create_project(payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedDto {
            message: "Project created successfully".to_string(),
            id: project.id,
        }),
    ))
}

/// List projects, optionally only those owned by a user
#[utoipa::path(
    get,
    path = "/projects",
    tag = PROJECT_TAG,
    params(UserIdQuery),
    responses(
        (status = 200, description = "Projects, newest first", body = ProjectListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> Result<impl IntoResponse, Error> {
    let projects = ProjectService::new(&state.db)
        .list_projects(query.user_id.as_deref())
        .await?;

    Ok((
        StatusCode::OK,
        Json(ProjectListDto {
            projects: projects.into_iter().map(ProjectDto::from).collect(),
        }),
    ))
}

/// Change the status of a project
#[utoipa::path(
    put,
    path = "/projects/{id}",
    tag = PROJECT_TAG,
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    request_body = StatusUpdateDto,
    responses(
        (status = 200, description = "Status updated", body = MessageDto),
        (status = 400, description = "Invalid status", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<StatusUpdateDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload?;

    ProjectService::new(&state.db)
        .update_status(id, &payload.status)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Project updated successfully".to_string(),
        }),
    ))
}

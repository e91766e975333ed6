//! Job post and job application endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{CreatedDto, ErrorDto, MessageDto, StatusUpdateDto, UserIdQuery},
        job::{
            CreateJobApplicationDto, CreateJobDto, JobApplicationListDto, JobDto, JobListDto,
            JobQuery,
        },
    },
    server::{
        error::Error, model::app::AppState, service::job::JobService,
        util::validation::require_filter,
    },
};

/// OpenAPI tag for job endpoints
pub static JOB_TAG: &str = "job";

/// Post a job
#[utoipa::path(
    post,
    path = "/jobs",
    tag = JOB_TAG,
    request_body = CreateJobDto,
    responses(
        (status = 201, description = "Job posted", body = CreatedDto),
        (status = 400, description = "Missing field or malformed body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_job(
    State(state): State<AppState>,
    payload: Result<Json<CreateJobDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload?;

    let job = JobService::new(&state.db).create_job(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedDto {
            message: "Job posted successfully".to_string(),
            id: job.id,
        }),
    ))
}

/// List jobs with optional poster and status filters
#[utoipa::path(
    get,
    path = "/jobs",
    tag = JOB_TAG,
    params(JobQuery),
    responses(
        (status = 200, description = "Jobs, newest first", body = JobListDto),
        (status = 400, description = "Invalid status filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobQuery>,
) -> Result<impl IntoResponse, Error> {
    let jobs = JobService::new(&state.db)
        .list_jobs(query.alumni_user_id.as_deref(), query.status.as_deref())
        .await?;

    Ok((
        StatusCode::OK,
        Json(JobListDto {
            jobs: jobs.into_iter().map(JobDto::from).collect(),
        }),
    ))
}

/// Open or close a job post
#[utoipa::path(
    put,
    path = "/jobs/{id}",
    tag = JOB_TAG,
    params(
        ("id" = i32, Path, description = "Job ID")
    ),
    request_body = StatusUpdateDto,
    responses(
        (status = 200, description = "Status updated", body = MessageDto),
        (status = 400, description = "Invalid status", body = ErrorDto),
        (status = 404, description = "Job not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_job(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<StatusUpdateDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload?;

    JobService::new(&state.db)
        .update_status(id, &payload.status)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Job updated successfully".to_string(),
        }),
    ))
}

/// Apply to an active job
#[utoipa::path(
    post,
    path = "/jobs/{id}/applications",
    tag = JOB_TAG,
    params(
        ("id" = i32, Path, description = "Job ID")
    ),
    request_body = CreateJobApplicationDto,
    responses(
        (status = 201, description = "Application submitted", body = CreatedDto),
        (status = 400, description = "Missing field or job closed", body = ErrorDto),
        (status = 404, description = "Job not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_job_application(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<CreateJobApplicationDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload?;

    let application = JobService::new(&state.db).apply(id, payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedDto {
            message: "Application submitted successfully".to_string(),
            id: application.id,
        }),
    ))
}

/// List applications received by a job
#[utoipa::path(
    get,
    path = "/jobs/{id}/applications",
    tag = JOB_TAG,
    params(
        ("id" = i32, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Applications, newest first", body = JobApplicationListDto),
        (status = 404, description = "Job not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_job_applications(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let applications = JobService::new(&state.db)
        .list_applications_for_job(id)
        .await?;

    Ok((StatusCode::OK, Json(JobApplicationListDto { applications })))
}

/// List applications submitted by a user
#[utoipa::path(
    get,
    path = "/job-applications",
    tag = JOB_TAG,
    params(UserIdQuery),
    responses(
        (status = 200, description = "Applications with job titles, newest first", body = JobApplicationListDto),
        (status = 400, description = "Missing userId", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_user_job_applications(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_filter("userId", query.user_id.as_deref())?;

    let applications = JobService::new(&state.db)
        .list_applications_by_applicant(user_id)
        .await?;

    Ok((StatusCode::OK, Json(JobApplicationListDto { applications })))
}

/// Accept or reject a job application
#[utoipa::path(
    put,
    path = "/job-applications/{id}/status",
    tag = JOB_TAG,
    params(
        ("id" = i32, Path, description = "Job application ID")
    ),
    request_body = StatusUpdateDto,
    responses(
        (status = 200, description = "Status updated", body = MessageDto),
        (status = 400, description = "Invalid status", body = ErrorDto),
        (status = 404, description = "Job application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_job_application_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<StatusUpdateDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload?;

    JobService::new(&state.db)
        .update_application_status(id, &payload.status)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Application status updated successfully".to_string(),
        }),
    ))
}

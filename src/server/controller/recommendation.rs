//! Recommendation request endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{CreatedDto, ErrorDto, MessageDto, StatusUpdateDto},
        recommendation::{
            CreateRecommendationRequestDto, RecommendationRequestDto,
            RecommendationRequestListDto, RecommendationRequestQuery,
        },
    },
    server::{error::Error, model::app::AppState, service::recommendation::RecommendationService},
};

/// OpenAPI tag for recommendation request endpoints
pub static RECOMMENDATION_TAG: &str = "recommendation";

/// Ask an alumni for a recommendation letter
#[utoipa::path(
    post,
    path = "/recommendation-requests",
    tag = RECOMMENDATION_TAG,
    request_body = CreateRecommendationRequestDto,
    responses(
        (status = 201, description = "Recommendation request sent", body = CreatedDto),
        (status = 400, description = "Missing field or malformed body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_recommendation_request(
    State(state): State<AppState>,
    payload: Result<Json<CreateRecommendationRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload?;

    let request = RecommendationService::new(&state.db)
        .create_request(payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedDto {
            message: "Recommendation request sent successfully".to_string(),
            id: request.id,
        }),
    ))
}

/// List recommendation requests addressed to an alumni or made by a student
#[utoipa::path(
    get,
    path = "/recommendation-requests",
    tag = RECOMMENDATION_TAG,
    params(RecommendationRequestQuery),
    responses(
        (status = 200, description = "Requests, newest first", body = RecommendationRequestListDto),
        (status = 400, description = "Neither alumniId nor studentId provided", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_recommendation_requests(
    State(state): State<AppState>,
    Query(query): Query<RecommendationRequestQuery>,
) -> Result<impl IntoResponse, Error> {
    let requests = RecommendationService::new(&state.db)
        .list_requests(query.alumni_id.as_deref(), query.student_id.as_deref())
        .await?;

    Ok((
        StatusCode::OK,
        Json(RecommendationRequestListDto {
            requests: requests
                .into_iter()
                .map(RecommendationRequestDto::from)
                .collect(),
        }),
    ))
}

/// Accept or reject a recommendation request
#[utoipa::path(
    put,
    path = "/recommendation-requests/{id}/status",
    tag = RECOMMENDATION_TAG,
    params(
        ("id" = i32, Path, description = "Recommendation request ID")
    ),
    request_body = StatusUpdateDto,
    responses(
        (status = 200, description = "Status updated", body = MessageDto),
        (status = 400, description = "Invalid status", body = ErrorDto),
        (status = 404, description = "Recommendation request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_recommendation_request_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<StatusUpdateDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload?;

    RecommendationService::new(&state.db)
        .update_status(id, &payload.status)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Recommendation request status updated successfully".to_string(),
        }),
    ))
}

use chrono::{NaiveDate, NaiveDateTime};
use entity::sea_orm_active_enums::RequestStatus;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecommendationRequestDto {
    pub alumni_id: String,
    pub student_id: String,
    /// e.g. `graduate_school`, `job`, `scholarship`
    pub request_type: String,
    pub purpose: String,
    pub deadline: Option<NaiveDate>,
    pub message: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequestDto {
    pub id: i32,
    pub alumni_id: String,
    pub student_id: String,
    pub request_type: String,
    pub purpose: String,
    pub deadline: Option<NaiveDate>,
    pub message: Option<String>,
    #[schema(value_type = String)]
    pub status: RequestStatus,
    pub created_at: NaiveDateTime,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct RecommendationRequestListDto {
    pub requests: Vec<RecommendationRequestDto>,
}

/// Exactly one of the two filters is required
#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct RecommendationRequestQuery {
    pub alumni_id: Option<String>,
    pub student_id: Option<String>,
}

impl From<entity::recommendation_request::Model> for RecommendationRequestDto {
    fn from(request: entity::recommendation_request::Model) -> Self {
        Self {
            id: request.id,
            alumni_id: request.alumni_id,
            student_id: request.student_id,
            request_type: request.request_type,
            purpose: request.purpose,
            deadline: request.deadline,
            message: request.message,
            status: request.status,
            created_at: request.created_at,
        }
    }
}

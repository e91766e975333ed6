use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::RequestStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCollaborationRequestDto {
    pub project_id: i32,
    pub sender_user_id: String,
    /// Defaults to the owner of the project when omitted
    pub receiver_user_id: Option<String>,
    pub message: String,
    pub requested_role: String,
    pub availability: String,
    pub portfolio_link: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollaborationRequestDto {
    pub id: i32,
    pub project_id: i32,
    /// Title of the targeted project, absent if the project no longer exists
    pub project_title: Option<String>,
    pub sender_user_id: String,
    pub receiver_user_id: String,
    pub message: String,
    pub requested_role: String,
    pub availability: String,
    pub portfolio_link: Option<String>,
    pub skills: Vec<String>,
    #[schema(value_type = String)]
    pub status: RequestStatus,
    pub created_at: NaiveDateTime,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CollaborationListDto {
    pub collaborations: Vec<CollaborationRequestDto>,
}

impl CollaborationRequestDto {
    pub fn new(
        request: entity::collaboration_request::Model,
        project_title: Option<String>,
    ) -> Self {
        Self {
            id: request.id,
            project_id: request.project_id,
            project_title,
            sender_user_id: request.sender_user_id,
            receiver_user_id: request.receiver_user_id,
            message: request.message,
            requested_role: request.requested_role,
            availability: request.availability,
            portfolio_link: request.portfolio_link,
            skills: request.skills.into(),
            status: request.status,
            created_at: request.created_at,
        }
    }
}

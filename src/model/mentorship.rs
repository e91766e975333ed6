use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::RequestStatus;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMentorshipDto {
    pub creator_id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub specialties: Vec<String>,
    pub price: f64,
    pub max_mentees: i32,
    pub duration: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MentorshipDto {
    pub id: i32,
    pub creator_id: String,
    pub title: String,
    pub description: String,
    pub specialties: Vec<String>,
    pub price: f64,
    pub max_mentees: i32,
    pub duration: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct MentorshipListDto {
    pub mentorships: Vec<MentorshipDto>,
}

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct MentorshipQuery {
    pub creator_id: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMentorshipRequestDto {
    pub mentorship_id: i32,
    /// Defaults to the creator of the mentorship offering when omitted
    pub mentor_id: Option<String>,
    pub sender_id: String,
    pub message: String,
    pub goals: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MentorshipRequestDto {
    pub id: i32,
    pub mentorship_id: i32,
    pub mentorship_title: Option<String>,
    pub mentor_id: String,
    pub sender_id: String,
    pub message: String,
    pub goals: Option<String>,
    pub skills: Vec<String>,
    #[schema(value_type = String)]
    pub status: RequestStatus,
    pub created_at: NaiveDateTime,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct MentorshipRequestListDto {
    pub requests: Vec<MentorshipRequestDto>,
}

/// Exactly one of the two filters is required
#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct MentorshipRequestQuery {
    pub mentor_id: Option<String>,
    pub sender_id: Option<String>,
}

impl From<entity::mentorship::Model> for MentorshipDto {
    fn from(mentorship: entity::mentorship::Model) -> Self {
        Self {
            id: mentorship.id,
            creator_id: mentorship.creator_id,
            title: mentorship.title,
            description: mentorship.description,
            specialties: mentorship.specialties.into(),
            price: mentorship.price,
            max_mentees: mentorship.max_mentees,
            duration: mentorship.duration,
            created_at: mentorship.created_at,
        }
    }
}

impl MentorshipRequestDto {
    pub fn new(
        request: entity::mentorship_request::Model,
        mentorship_title: Option<String>,
    ) -> Self {
        Self {
            id: request.id,
            mentorship_id: request.mentorship_id,
            mentorship_title,
            mentor_id: request.mentor_id,
            sender_id: request.sender_id,
            message: request.message,
            goals: request.goals,
            skills: request.skills.into(),
            status: request.status,
            created_at: request.created_at,
        }
    }
}

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventDto {
    pub creator_id: String,
    pub responder_id: Option<String>,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub is_virtual: bool,
    pub location: Option<String>,
    pub meeting_link: Option<String>,
    pub event_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    /// Maximum number of registrations, unlimited when omitted
    pub capacity: Option<i32>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    pub id: i32,
    pub creator_id: String,
    pub responder_id: Option<String>,
    pub title: String,
    pub description: String,
    pub is_virtual: bool,
    pub location: Option<String>,
    pub meeting_link: Option<String>,
    pub event_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub capacity: Option<i32>,
    pub created_at: NaiveDateTime,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct EventListDto {
    pub events: Vec<EventDto>,
}

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct EventQuery {
    pub creator_id: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRegistrationDto {
    pub user_id: String,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventRegistrationDto {
    pub id: i32,
    pub event_id: i32,
    pub user_id: String,
    pub created_at: NaiveDateTime,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct EventRegistrationListDto {
    pub registrations: Vec<EventRegistrationDto>,
}

impl From<entity::event::Model> for EventDto {
    fn from(event: entity::event::Model) -> Self {
        Self {
            id: event.id,
            creator_id: event.creator_id,
            responder_id: event.responder_id,
            title: event.title,
            description: event.description,
            is_virtual: event.is_virtual,
            location: event.location,
            meeting_link: event.meeting_link,
            event_date: event.event_date,
            start_time: event.start_time,
            end_time: event.end_time,
            capacity: event.capacity,
            created_at: event.created_at,
        }
    }
}

impl From<entity::event_registration::Model> for EventRegistrationDto {
    fn from(registration: entity::event_registration::Model) -> Self {
        Self {
            id: registration.id,
            event_id: registration.event_id,
            user_id: registration.user_id,
            created_at: registration.created_at,
        }
    }
}

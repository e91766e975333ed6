//! Requests to join a mentorship offering.

use chrono::Utc;
use entity::sea_orm_active_enums::RequestStatus;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::mentorship::CreateMentorshipRequestDto;

/// Repository for the `mentorship_requests` table
pub struct MentorshipRequestRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MentorshipRequestRepository<'a, C> {
    /// Creates a new instance of [`MentorshipRequestRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert a pending mentorship request addressed to `mentor_id`
    pub async fn create(
        &self,
        request: CreateMentorshipRequestDto,
        mentor_id: String,
    ) -> Result<entity::mentorship_request::Model, DbErr> {
        entity::prelude::MentorshipRequest::insert(entity::mentorship_request::ActiveModel {
            mentorship_id: ActiveValue::Set(request.mentorship_id),
            mentor_id: ActiveValue::Set(mentor_id),
            sender_id: ActiveValue::Set(request.sender_id),
            message: ActiveValue::Set(request.message),
            goals: ActiveValue::Set(request.goals),
            skills: ActiveValue::Set(request.skills.into()),
            status: ActiveValue::Set(RequestStatus::Pending),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    /// Requests received by a mentor, newest first
    pub async fn list_by_mentor(
        &self,
        mentor_id: &str,
    ) -> Result<Vec<entity::mentorship_request::Model>, DbErr> {
        entity::prelude::MentorshipRequest::find()
            .filter(entity::mentorship_request::Column::MentorId.eq(mentor_id))
            .order_by_desc(entity::mentorship_request::Column::CreatedAt)
            .order_by_desc(entity::mentorship_request::Column::Id)
            .all(self.db)
            .await
    }

    /// Requests sent by a mentee, newest first
    pub async fn list_by_sender(
        &self,
        sender_id: &str,
    ) -> Result<Vec<entity::mentorship_request::Model>, DbErr> {
        entity::prelude::MentorshipRequest::find()
            .filter(entity::mentorship_request::Column::SenderId.eq(sender_id))
            .order_by_desc(entity::mentorship_request::Column::CreatedAt)
            .order_by_desc(entity::mentorship_request::Column::Id)
            .all(self.db)
            .await
    }
}

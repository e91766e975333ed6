//! Collaboration requests sent against projects.

use chrono::Utc;
use entity::sea_orm_active_enums::RequestStatus;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::collaboration::CreateCollaborationRequestDto;

/// Repository for the `collaboration_requests` table
pub struct CollaborationRequestRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CollaborationRequestRepository<'a, C> {
    /// Creates a new instance of [`CollaborationRequestRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert a pending collaboration request addressed to `receiver_user_id`
    pub async fn create(
        &self,
        request: CreateCollaborationRequestDto,
        receiver_user_id: String,
    ) -> Result<entity::collaboration_request::Model, DbErr> {
        entity::prelude::CollaborationRequest::insert(entity::collaboration_request::ActiveModel {
            project_id: ActiveValue::Set(request.project_id),
            sender_user_id: ActiveValue::Set(request.sender_user_id),
            receiver_user_id: ActiveValue::Set(receiver_user_id),
            message: ActiveValue::Set(request.message),
            requested_role: ActiveValue::Set(request.requested_role),
            availability: ActiveValue::Set(request.availability),
            portfolio_link: ActiveValue::Set(request.portfolio_link),
            skills: ActiveValue::Set(request.skills.into()),
            status: ActiveValue::Set(RequestStatus::Pending),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    /// Requests received by `user_id`, newest first
    pub async fn list_received(
        &self,
        user_id: &str,
    ) -> Result<Vec<entity::collaboration_request::Model>, DbErr> {
        entity::prelude::CollaborationRequest::find()
            .filter(entity::collaboration_request::Column::ReceiverUserId.eq(user_id))
            .order_by_desc(entity::collaboration_request::Column::CreatedAt)
            .order_by_desc(entity::collaboration_request::Column::Id)
            .all(self.db)
            .await
    }

    /// Requests sent by `user_id`, newest first
    pub async fn list_sent(
        &self,
        user_id: &str,
    ) -> Result<Vec<entity::collaboration_request::Model>, DbErr> {
        entity::prelude::CollaborationRequest::find()
            .filter(entity::collaboration_request::Column::SenderUserId.eq(user_id))
            .order_by_desc(entity::collaboration_request::Column::CreatedAt)
            .order_by_desc(entity::collaboration_request::Column::Id)
            .all(self.db)
            .await
    }
}

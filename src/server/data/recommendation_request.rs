//! Recommendation letter requests.

use chrono::Utc;
use entity::sea_orm_active_enums::RequestStatus;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::recommendation::CreateRecommendationRequestDto;

/// Repository for the `recommendation_requests` table
pub struct RecommendationRequestRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RecommendationRequestRepository<'a, C> {
    /// Creates a new instance of [`RecommendationRequestRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert a pending recommendation request
    pub async fn create(
        &self,
        request: CreateRecommendationRequestDto,
    ) -> Result<entity::recommendation_request::Model, DbErr> {
        entity::prelude::RecommendationRequest::insert(
            entity::recommendation_request::ActiveModel {
                alumni_id: ActiveValue::Set(request.alumni_id),
                student_id: ActiveValue::Set(request.student_id),
                request_type: ActiveValue::Set(request.request_type),
                purpose: ActiveValue::Set(request.purpose),
                deadline: ActiveValue::Set(request.deadline),
                message: ActiveValue::Set(request.message),
                status: ActiveValue::Set(RequestStatus::Pending),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            },
        )
        .exec_with_returning(self.db)
        .await
    }

    /// Requests addressed to an alumni, newest first
    pub async fn list_by_alumni(
        &self,
        alumni_id: &str,
    ) -> Result<Vec<entity::recommendation_request::Model>, DbErr> {
        entity::prelude::RecommendationRequest::find()
            .filter(entity::recommendation_request::Column::AlumniId.eq(alumni_id))
            .order_by_desc(entity::recommendation_request::Column::CreatedAt)
            .order_by_desc(entity::recommendation_request::Column::Id)
            .all(self.db)
            .await
    }

    /// Requests made by a student, newest first
    pub async fn list_by_student(
        &self,
        student_id: &str,
    ) -> Result<Vec<entity::recommendation_request::Model>, DbErr> {
        entity::prelude::RecommendationRequest::find()
            .filter(entity::recommendation_request::Column::StudentId.eq(student_id))
            .order_by_desc(entity::recommendation_request::Column::CreatedAt)
            .order_by_desc(entity::recommendation_request::Column::Id)
            .all(self.db)
            .await
    }
}

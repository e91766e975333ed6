//! Applications submitted to job posts.

use chrono::Utc;
use entity::sea_orm_active_enums::RequestStatus;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::job::CreateJobApplicationDto;

/// Repository for the `job_applications` table
pub struct JobApplicationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> JobApplicationRepository<'a, C> {
    /// Creates a new instance of [`JobApplicationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert a pending application for a job
    pub async fn create(
        &self,
        job_id: i32,
        application: CreateJobApplicationDto,
    ) -> Result<entity::job_application::Model, DbErr> {
        entity::prelude::JobApplication::insert(entity::job_application::ActiveModel {
            job_id: ActiveValue::Set(job_id),
            applicant_user_id: ActiveValue::Set(application.applicant_user_id),
            cover_letter: ActiveValue::Set(application.cover_letter),
            resume_link: ActiveValue::Set(application.resume_link),
            status: ActiveValue::Set(RequestStatus::Pending),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    /// Applications received by a job, newest first
    pub async fn list_by_job(
        &self,
        job_id: i32,
    ) -> Result<Vec<entity::job_application::Model>, DbErr> {
        entity::prelude::JobApplication::find()
            .filter(entity::job_application::Column::JobId.eq(job_id))
            .order_by_desc(entity::job_application::Column::CreatedAt)
            .order_by_desc(entity::job_application::Column::Id)
            .all(self.db)
            .await
    }

    /// Applications submitted by a user, newest first
    pub async fn list_by_applicant(
        &self,
        applicant_user_id: &str,
    ) -> Result<Vec<entity::job_application::Model>, DbErr> {
        entity::prelude::JobApplication::find()
            .filter(entity::job_application::Column::ApplicantUserId.eq(applicant_user_id))
            .order_by_desc(entity::job_application::Column::CreatedAt)
            .order_by_desc(entity::job_application::Column::Id)
            .all(self.db)
            .await
    }
}

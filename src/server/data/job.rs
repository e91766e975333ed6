//! Job posts.

use chrono::Utc;
use entity::sea_orm_active_enums::JobStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::job::CreateJobDto;

/// Repository for the `jobs` table
pub struct JobRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> JobRepository<'a, C> {
    /// Creates a new instance of [`JobRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert a new job post, which always starts `active`
    pub async fn create(&self, job: CreateJobDto) -> Result<entity::job::Model, DbErr> {
        entity::prelude::Job::insert(entity::job::ActiveModel {
            alumni_user_id: ActiveValue::Set(job.alumni_user_id),
            title: ActiveValue::Set(job.title),
            company: ActiveValue::Set(job.company),
            location: ActiveValue::Set(job.location),
            job_type: ActiveValue::Set(job.job_type),
            description: ActiveValue::Set(job.description),
            requirements: ActiveValue::Set(job.requirements.into()),
            skills: ActiveValue::Set(job.skills.into()),
            salary: ActiveValue::Set(job.salary),
            deadline: ActiveValue::Set(job.deadline),
            status: ActiveValue::Set(JobStatus::Active),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    /// Find a job by ID
    pub async fn get(&self, id: i32) -> Result<Option<entity::job::Model>, DbErr> {
        entity::prelude::Job::find_by_id(id).one(self.db).await
    }

    /// List jobs newest first with optional poster and status filters
    pub async fn list(
        &self,
        alumni_user_id: Option<&str>,
        status: Option<JobStatus>,
    ) -> Result<Vec<entity::job::Model>, DbErr> {
        let mut query = entity::prelude::Job::find();

        if let Some(alumni_user_id) = alumni_user_id {
            query = query.filter(entity::job::Column::AlumniUserId.eq(alumni_user_id));
        }
        if let Some(status) = status {
            query = query.filter(entity::job::Column::Status.eq(status));
        }

        query
            .order_by_desc(entity::job::Column::CreatedAt)
            .order_by_desc(entity::job::Column::Id)
            .all(self.db)
            .await
    }

    /// Returns `(id, title)` pairs for the provided job IDs
    pub async fn get_titles_by_ids(&self, ids: &[i32]) -> Result<Vec<(i32, String)>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Job::find()
            .select_only()
            .column(entity::job::Column::Id)
            .column(entity::job::Column::Title)
            .filter(entity::job::Column::Id.is_in(ids.iter().copied()))
            .into_tuple::<(i32, String)>()
            .all(self.db)
            .await
    }

    /// Open or close a job, returning `None` if it does not exist
    pub async fn update_status(
        &self,
        id: i32,
        status: JobStatus,
    ) -> Result<Option<entity::job::Model>, DbErr> {
        let job = match self.get(id).await? {
            Some(job) => job,
            None => return Ok(None),
        };

        let mut job_am = job.into_active_model();
        job_am.status = ActiveValue::Set(status);

        let job = job_am.update(self.db).await?;

        Ok(Some(job))
    }
}

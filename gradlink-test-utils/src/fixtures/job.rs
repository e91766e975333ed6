use chrono::Utc;
use entity::sea_orm_active_enums::{JobStatus, RequestStatus};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::mock_skills, TestContext};

impl TestContext {
    pub fn job(&self) -> JobFixtures<'_> {
        JobFixtures { context: self }
    }
}

pub struct JobFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> JobFixtures<'a> {
    pub async fn insert_job(
        &self,
        alumni_user_id: &str,
        status: JobStatus,
    ) -> Result<entity::job::Model, TestError> {
        Ok(entity::prelude::Job::insert(entity::job::ActiveModel {
            alumni_user_id: ActiveValue::Set(alumni_user_id.to_string()),
            title: ActiveValue::Set("Junior Backend Engineer".to_string()),
            company: ActiveValue::Set("Acme".to_string()),
            location: ActiveValue::Set("Dhaka".to_string()),
            job_type: ActiveValue::Set("full-time".to_string()),
            description: ActiveValue::Set("Build and maintain APIs".to_string()),
            requirements: ActiveValue::Set(vec!["BSc in CSE".to_string()].into()),
            skills: ActiveValue::Set(mock_skills().into()),
            salary: ActiveValue::Set(None),
            deadline: ActiveValue::Set(None),
            status: ActiveValue::Set(status),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.context.db)
        .await?)
    }

    pub async fn insert_job_application(
        &self,
        job_id: i32,
        applicant_user_id: &str,
    ) -> Result<entity::job_application::Model, TestError> {
        Ok(
            entity::prelude::JobApplication::insert(entity::job_application::ActiveModel {
                job_id: ActiveValue::Set(job_id),
                applicant_user_id: ActiveValue::Set(applicant_user_id.to_string()),
                cover_letter: ActiveValue::Set("Please consider my application".to_string()),
                resume_link: ActiveValue::Set(None),
                status: ActiveValue::Set(RequestStatus::Pending),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }
}

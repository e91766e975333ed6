//! Job posts and job applications.

use std::collections::HashMap;

use dioxus_logger::tracing;
use entity::sea_orm_active_enums::JobStatus;
use sea_orm::DatabaseConnection;

use crate::{
    model::job::{CreateJobApplicationDto, CreateJobDto, JobApplicationDto},
    server::{
        data::{job::JobRepository, job_application::JobApplicationRepository},
        error::{resource::ResourceError, validation::ValidationError, Error},
        model::db::{JobApplicationModel, JobModel},
        service::request::RequestService,
        util::validation::{parse_status, require_non_empty},
    },
};

/// Job posting, status changes and applications
pub struct JobService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JobService<'a> {
    /// Creates a new instance of [`JobService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Post a job, active from creation
    pub async fn create_job(&self, job: CreateJobDto) -> Result<JobModel, Error> {
        require_non_empty("alumniUserId", &job.alumni_user_id)?;
        require_non_empty("title", &job.title)?;
        require_non_empty("company", &job.company)?;
        require_non_empty("location", &job.location)?;
        require_non_empty("jobType", &job.job_type)?;
        require_non_empty("description", &job.description)?;

        let job = JobRepository::new(self.db).create(job).await?;

        tracing::info!("Job {} posted by {}", job.id, job.alumni_user_id);

        Ok(job)
    }

    /// List jobs with optional poster and status filters
    pub async fn list_jobs(
        &self,
        alumni_user_id: Option<&str>,
        status: Option<&str>,
    ) -> Result<Vec<JobModel>, Error> {
        let status = status.map(parse_status::<JobStatus>).transpose()?;

        let jobs = JobRepository::new(self.db)
            .list(alumni_user_id, status)
            .await?;

        Ok(jobs)
    }

    /// Open or close a job post
    pub async fn update_status(&self, id: i32, status: &str) -> Result<JobModel, Error> {
        let status: JobStatus = parse_status(status)?;

        let job = JobRepository::new(self.db)
            .update_status(id, status)
            .await?
            .ok_or_else(|| ResourceError::not_found("Job", id))?;

        tracing::info!("Job {} set to {:?}", id, status);

        Ok(job)
    }

    /// Apply to a job
    ///
    /// # Returns
    /// - `Ok(JobApplicationModel)`: The pending application
    /// - `Err(Error::ValidationError)`: A required field is blank or the job is closed
    /// - `Err(Error::ResourceError)`: The job does not exist
    /// - `Err(Error::DbErr)`: Database error
    pub async fn apply(
        &self,
        job_id: i32,
        application: CreateJobApplicationDto,
    ) -> Result<JobApplicationModel, Error> {
        require_non_empty("applicantUserId", &application.applicant_user_id)?;
        require_non_empty("coverLetter", &application.cover_letter)?;

        let job = JobRepository::new(self.db)
            .get(job_id)
            .await?
            .ok_or_else(|| ResourceError::not_found("Job", job_id))?;

        if job.status == JobStatus::Closed {
            return Err(ValidationError::JobClosed(job.id).into());
        }

        let application = JobApplicationRepository::new(self.db)
            .create(job.id, application)
            .await?;

        tracing::info!(
            "{} applied to job {} with application {}",
            application.applicant_user_id,
            job.id,
            application.id
        );

        Ok(application)
    }

    /// Applications received by a job
    pub async fn list_applications_for_job(
        &self,
        job_id: i32,
    ) -> Result<Vec<JobApplicationDto>, Error> {
        let job = JobRepository::new(self.db)
            .get(job_id)
            .await?
            .ok_or_else(|| ResourceError::not_found("Job", job_id))?;

        let applications = JobApplicationRepository::new(self.db)
            .list_by_job(job.id)
            .await?;

        Ok(applications
            .into_iter()
            .map(|application| JobApplicationDto::new(application, Some(job.title.clone())))
            .collect())
    }

    /// Applications submitted by a user with the title of each job
    pub async fn list_applications_by_applicant(
        &self,
        applicant_user_id: &str,
    ) -> Result<Vec<JobApplicationDto>, Error> {
        let applications = JobApplicationRepository::new(self.db)
            .list_by_applicant(applicant_user_id)
            .await?;

        let job_ids: Vec<i32> = applications.iter().map(|a| a.job_id).collect();
        let titles: HashMap<i32, String> = JobRepository::new(self.db)
            .get_titles_by_ids(&job_ids)
            .await?
            .into_iter()
            .collect();

        Ok(applications
            .into_iter()
            .map(|application| {
                let title = titles.get(&application.job_id).cloned();
                JobApplicationDto::new(application, title)
            })
            .collect())
    }

    /// Accept, reject or reset a job application
    pub async fn update_application_status(
        &self,
        id: i32,
        status: &str,
    ) -> Result<JobApplicationModel, Error> {
        RequestService::new(self.db)
            .update_status::<entity::prelude::JobApplication>(id, status)
            .await
    }
}

//! Tests for JobService.

use entity::sea_orm_active_enums::{JobStatus, RequestStatus};
use gradlink::{
    model::job::{CreateJobApplicationDto, CreateJobDto},
    server::{
        error::{resource::ResourceError, validation::ValidationError, Error},
        service::job::JobService,
    },
};
use gradlink_test_utils::prelude::*;

fn create_job_dto() -> CreateJobDto {
    CreateJobDto {
        alumni_user_id: "alumni-1".to_string(),
        title: "Junior Backend Engineer".to_string(),
        company: "Acme".to_string(),
        location: "Dhaka".to_string(),
        job_type: "full-time".to_string(),
        description: "Build and maintain APIs".to_string(),
        requirements: vec![],
        skills: vec!["Rust".to_string()],
        salary: None,
        deadline: None,
    }
}

fn application_dto(applicant: &str) -> CreateJobApplicationDto {
    CreateJobApplicationDto {
        applicant_user_id: applicant.to_string(),
        cover_letter: "Please consider my application".to_string(),
        resume_link: None,
    }
}

mod jobs {
    use super::*;

    /// Expect new jobs to be active
    #[tokio::test]
    async fn creates_active_job() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;

        let job_service = JobService::new(&test.db);
        let result = job_service.create_job(create_job_dto()).await;

        assert!(matches!(result, Ok(ref job) if job.status == JobStatus::Active));

        Ok(())
    }

    /// Expect MissingField when the company is blank
    #[tokio::test]
    async fn fails_for_blank_company() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;

        let mut dto = create_job_dto();
        dto.company = "  ".to_string();

        let job_service = JobService::new(&test.db);
        let result = job_service.create_job(dto).await;

        assert!(matches!(
            result,
            Err(Error::ValidationError(ValidationError::MissingField("company")))
        ));

        Ok(())
    }

    /// Expect the status filter to exclude closed jobs
    #[tokio::test]
    async fn lists_jobs_by_status() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        test.job().insert_job("alumni-1", JobStatus::Active).await?;
        test.job().insert_job("alumni-1", JobStatus::Closed).await?;
        test.job().insert_job("alumni-2", JobStatus::Active).await?;

        let job_service = JobService::new(&test.db);
        let active = job_service.list_jobs(None, Some("active")).await.unwrap();
        let mine = job_service
            .list_jobs(Some("alumni-1"), Some("active"))
            .await
            .unwrap();

        assert_eq!(active.len(), 2);
        assert_eq!(mine.len(), 1);

        Ok(())
    }

    /// Expect InvalidStatus when closing a job with an unknown status
    #[tokio::test]
    async fn update_fails_for_invalid_status() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        let job = test.job().insert_job("alumni-1", JobStatus::Active).await?;

        let job_service = JobService::new(&test.db);
        let result = job_service.update_status(job.id, "paused").await;

        assert!(matches!(
            result,
            Err(Error::ValidationError(ValidationError::InvalidStatus(_)))
        ));

        Ok(())
    }
}

mod applications {
    use super::*;

    /// Expect a pending application for an active job
    #[tokio::test]
    async fn applies_to_active_job() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        let job = test.job().insert_job("alumni-1", JobStatus::Active).await?;

        let job_service = JobService::new(&test.db);
        let result = job_service.apply(job.id, application_dto("student-1")).await;

        assert!(result.is_ok());
        let application = result.unwrap();
        assert_eq!(application.job_id, job.id);
        assert_eq!(application.status, RequestStatus::Pending);

        Ok(())
    }

    /// Expect JobClosed for a closed job
    #[tokio::test]
    async fn fails_for_closed_job() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        let job = test.job().insert_job("alumni-1", JobStatus::Closed).await?;

        let job_service = JobService::new(&test.db);
        let result = job_service.apply(job.id, application_dto("student-1")).await;

        assert!(matches!(
            result,
            Err(Error::ValidationError(ValidationError::JobClosed(_)))
        ));

        Ok(())
    }

    /// Expect NotFound for a nonexistent job
    #[tokio::test]
    async fn fails_for_nonexistent_job() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;

        let job_service = JobService::new(&test.db);
        let result = job_service.apply(42, application_dto("student-1")).await;

        assert!(matches!(
            result,
            Err(Error::ResourceError(ResourceError::NotFound { .. }))
        ));

        Ok(())
    }

    /// Expect job titles on both the per-job and per-applicant lists
    #[tokio::test]
    async fn lists_applications_with_titles() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        let job = test.job().insert_job("alumni-1", JobStatus::Active).await?;
        test.job().insert_job_application(job.id, "student-1").await?;
        test.job().insert_job_application(job.id, "student-2").await?;

        let job_service = JobService::new(&test.db);
        let for_job = job_service.list_applications_for_job(job.id).await.unwrap();
        let for_user = job_service
            .list_applications_by_applicant("student-1")
            .await
            .unwrap();

        assert_eq!(for_job.len(), 2);
        assert_eq!(for_user.len(), 1);
        assert_eq!(
            for_user[0].job_title.as_deref(),
            Some("Junior Backend Engineer")
        );

        Ok(())
    }

    /// Expect NotFound when listing applications of a nonexistent job
    #[tokio::test]
    async fn list_fails_for_nonexistent_job() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;

        let job_service = JobService::new(&test.db);
        let result = job_service.list_applications_for_job(42).await;

        assert!(matches!(
            result,
            Err(Error::ResourceError(ResourceError::NotFound { .. }))
        ));

        Ok(())
    }

    /// Expect the application to be rejected
    #[tokio::test]
    async fn updates_application_status() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        let job = test.job().insert_job("alumni-1", JobStatus::Active).await?;
        let application = test.job().insert_job_application(job.id, "student-1").await?;

        let job_service = JobService::new(&test.db);
        let result = job_service
            .update_application_status(application.id, "rejected")
            .await;

        assert!(matches!(result, Ok(ref a) if a.status == RequestStatus::Rejected));

        Ok(())
    }
}

use chrono::{NaiveDate, NaiveDateTime};
use entity::sea_orm_active_enums::{JobStatus, RequestStatus};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobDto {
    pub alumni_user_id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub salary: Option<String>,
    pub deadline: Option<NaiveDate>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobDto {
    pub id: i32,
    pub alumni_user_id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub skills: Vec<String>,
    pub salary: Option<String>,
    pub deadline: Option<NaiveDate>,
    #[schema(value_type = String)]
    pub status: JobStatus,
    pub created_at: NaiveDateTime,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct JobListDto {
    pub jobs: Vec<JobDto>,
}

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct JobQuery {
    /// Only jobs posted by this alumni
    pub alumni_user_id: Option<String>,
    /// Only jobs with this status, `active` or `closed`
    pub status: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobApplicationDto {
    pub applicant_user_id: String,
    pub cover_letter: String,
    pub resume_link: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobApplicationDto {
    pub id: i32,
    pub job_id: i32,
    pub job_title: Option<String>,
    pub applicant_user_id: String,
    pub cover_letter: String,
    pub resume_link: Option<String>,
    #[schema(value_type = String)]
    pub status: RequestStatus,
    pub created_at: NaiveDateTime,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct JobApplicationListDto {
    pub applications: Vec<JobApplicationDto>,
}

impl From<entity::job::Model> for JobDto {
    fn from(job: entity::job::Model) -> Self {
        Self {
            id: job.id,
            alumni_user_id: job.alumni_user_id,
            title: job.title,
            company: job.company,
            location: job.location,
            job_type: job.job_type,
            description: job.description,
            requirements: job.requirements.into(),
            skills: job.skills.into(),
            salary: job.salary,
            deadline: job.deadline,
            status: job.status,
            created_at: job.created_at,
        }
    }
}

impl JobApplicationDto {
    pub fn new(application: entity::job_application::Model, job_title: Option<String>) -> Self {
        Self {
            id: application.id,
            job_id: application.job_id,
            job_title,
            applicant_user_id: application.applicant_user_id,
            cover_letter: application.cover_letter,
            resume_link: application.resume_link,
            status: application.status,
            created_at: application.created_at,
        }
    }
}

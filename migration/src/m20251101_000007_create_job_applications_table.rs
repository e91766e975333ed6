use sea_orm_migration::{prelude::*, schema::*};

static IDX_JOB_APPLICATIONS_JOB_ID: &str = "idx_job_applications_job_id";
static IDX_JOB_APPLICATIONS_APPLICANT: &str = "idx_job_applications_applicant_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(JobApplications::Table)
                    .if_not_exists()
                    .col(pk_auto(JobApplications::Id))
                    .col(integer(JobApplications::JobId))
                    .col(string(JobApplications::ApplicantUserId))
                    .col(text(JobApplications::CoverLetter))
                    .col(string_null(JobApplications::ResumeLink))
                    .col(string_len(JobApplications::Status, 20))
                    .col(timestamp(JobApplications::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_JOB_APPLICATIONS_JOB_ID)
                    .table(JobApplications::Table)
                    .col(JobApplications::JobId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_JOB_APPLICATIONS_APPLICANT)
                    .table(JobApplications::Table)
                    .col(JobApplications::ApplicantUserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_JOB_APPLICATIONS_APPLICANT)
                    .table(JobApplications::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_JOB_APPLICATIONS_JOB_ID)
                    .table(JobApplications::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(JobApplications::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum JobApplications {
    Table,
    Id,
    JobId,
    ApplicantUserId,
    CoverLetter,
    ResumeLink,
    Status,
    CreatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

static IDX_JOBS_ALUMNI_USER_ID: &str = "idx_jobs_alumni_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Jobs::Table)
                    .if_not_exists()
                    .col(pk_auto(Jobs::Id))
                    .col(string(Jobs::AlumniUserId))
                    .col(string(Jobs::Title))
                    .col(string(Jobs::Company))
                    .col(string(Jobs::Location))
                    .col(string(Jobs::JobType))
                    .col(text(Jobs::Description))
                    .col(json(Jobs::Requirements))
                    .col(json(Jobs::Skills))
                    .col(string_null(Jobs::Salary))
                    .col(date_null(Jobs::Deadline))
                    .col(string_len(Jobs::Status, 20))
                    .col(timestamp(Jobs::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_JOBS_ALUMNI_USER_ID)
                    .table(Jobs::Table)
                    .col(Jobs::AlumniUserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_JOBS_ALUMNI_USER_ID)
                    .table(Jobs::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Jobs::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Jobs {
    Table,
    Id,
    AlumniUserId,
    Title,
    Company,
    Location,
    JobType,
    Description,
    Requirements,
    Skills,
    Salary,
    Deadline,
    Status,
    CreatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

static IDX_RECOMMENDATION_REQUESTS_ALUMNI_ID: &str = "idx_recommendation_requests_alumni_id";
static IDX_RECOMMENDATION_REQUESTS_STUDENT_ID: &str = "idx_recommendation_requests_student_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RecommendationRequests::Table)
                    .if_not_exists()
                    .col(pk_auto(RecommendationRequests::Id))
                    .col(string(RecommendationRequests::AlumniId))
                    .col(string(RecommendationRequests::StudentId))
                    .col(string(RecommendationRequests::RequestType))
                    .col(text(RecommendationRequests::Purpose))
                    .col(date_null(RecommendationRequests::Deadline))
                    .col(text_null(RecommendationRequests::Message))
                    .col(string_len(RecommendationRequests::Status, 20))
                    .col(timestamp(RecommendationRequests::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RECOMMENDATION_REQUESTS_ALUMNI_ID)
                    .table(RecommendationRequests::Table)
                    .col(RecommendationRequests::AlumniId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RECOMMENDATION_REQUESTS_STUDENT_ID)
                    .table(RecommendationRequests::Table)
                    .col(RecommendationRequests::StudentId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RECOMMENDATION_REQUESTS_STUDENT_ID)
                    .table(RecommendationRequests::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RECOMMENDATION_REQUESTS_ALUMNI_ID)
                    .table(RecommendationRequests::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RecommendationRequests::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum RecommendationRequests {
    Table,
    Id,
    AlumniId,
    StudentId,
    RequestType,
    Purpose,
    Deadline,
    Message,
    Status,
    CreatedAt,
}

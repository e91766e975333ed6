use sea_orm_migration::{prelude::*, schema::*};

static IDX_MENTORSHIP_REQUESTS_MENTOR_ID: &str = "idx_mentorship_requests_mentor_id";
static IDX_MENTORSHIP_REQUESTS_SENDER_ID: &str = "idx_mentorship_requests_sender_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MentorshipRequests::Table)
                    .if_not_exists()
                    .col(pk_auto(MentorshipRequests::Id))
                    .col(integer(MentorshipRequests::MentorshipId))
                    .col(string(MentorshipRequests::MentorId))
                    .col(string(MentorshipRequests::SenderId))
                    .col(text(MentorshipRequests::Message))
                    .col(text_null(MentorshipRequests::Goals))
                    .col(json(MentorshipRequests::Skills))
                    .col(string_len(MentorshipRequests::Status, 20))
                    .col(timestamp(MentorshipRequests::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MENTORSHIP_REQUESTS_MENTOR_ID)
                    .table(MentorshipRequests::Table)
                    .col(MentorshipRequests::MentorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MENTORSHIP_REQUESTS_SENDER_ID)
                    .table(MentorshipRequests::Table)
                    .col(MentorshipRequests::SenderId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MENTORSHIP_REQUESTS_SENDER_ID)
                    .table(MentorshipRequests::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MENTORSHIP_REQUESTS_MENTOR_ID)
                    .table(MentorshipRequests::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MentorshipRequests::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum MentorshipRequests {
    Table,
    Id,
    MentorshipId,
    MentorId,
    SenderId,
    Message,
    Goals,
    Skills,
    Status,
    CreatedAt,
}

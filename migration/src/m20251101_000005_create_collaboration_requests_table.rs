use sea_orm_migration::{prelude::*, schema::*};

static IDX_COLLABORATION_REQUESTS_RECEIVER: &str = "idx_collaboration_requests_receiver_user_id";
static IDX_COLLABORATION_REQUESTS_SENDER: &str = "idx_collaboration_requests_sender_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CollaborationRequests::Table)
                    .if_not_exists()
                    .col(pk_auto(CollaborationRequests::Id))
                    .col(integer(CollaborationRequests::ProjectId))
                    .col(string(CollaborationRequests::SenderUserId))
                    .col(string(CollaborationRequests::ReceiverUserId))
                    .col(text(CollaborationRequests::Message))
                    .col(string(CollaborationRequests::RequestedRole))
                    .col(string(CollaborationRequests::Availability))
                    .col(string_null(CollaborationRequests::PortfolioLink))
                    .col(json(CollaborationRequests::Skills))
                    .col(string_len(CollaborationRequests::Status, 20))
                    .col(timestamp(CollaborationRequests::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COLLABORATION_REQUESTS_RECEIVER)
                    .table(CollaborationRequests::Table)
                    .col(CollaborationRequests::ReceiverUserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COLLABORATION_REQUESTS_SENDER)
                    .table(CollaborationRequests::Table)
                    .col(CollaborationRequests::SenderUserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_COLLABORATION_REQUESTS_SENDER)
                    .table(CollaborationRequests::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_COLLABORATION_REQUESTS_RECEIVER)
                    .table(CollaborationRequests::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CollaborationRequests::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum CollaborationRequests {
    Table,
    Id,
    ProjectId,
    SenderUserId,
    ReceiverUserId,
    Message,
    RequestedRole,
    Availability,
    PortfolioLink,
    Skills,
    Status,
    CreatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

static IDX_EVENTS_CREATOR_ID: &str = "idx_events_creator_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(pk_auto(Events::Id))
                    .col(string(Events::CreatorId))
                    .col(string_null(Events::ResponderId))
                    .col(string(Events::Title))
                    .col(text(Events::Description))
                    .col(boolean(Events::IsVirtual))
                    .col(string_null(Events::Location))
                    .col(string_null(Events::MeetingLink))
                    .col(date(Events::EventDate))
                    .col(time(Events::StartTime))
                    .col(time(Events::EndTime))
                    .col(integer_null(Events::Capacity))
                    .col(timestamp(Events::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EVENTS_CREATOR_ID)
                    .table(Events::Table)
                    .col(Events::CreatorId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EVENTS_CREATOR_ID)
                    .table(Events::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Events {
    Table,
    Id,
    CreatorId,
    ResponderId,
    Title,
    Description,
    IsVirtual,
    Location,
    MeetingLink,
    EventDate,
    StartTime,
    EndTime,
    Capacity,
    CreatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

static IDX_EVENT_REGISTRATIONS_EVENT_USER: &str = "idx_event_registrations_event_id_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventRegistrations::Table)
                    .if_not_exists()
                    .col(pk_auto(EventRegistrations::Id))
                    .col(integer(EventRegistrations::EventId))
                    .col(string(EventRegistrations::UserId))
                    .col(timestamp(EventRegistrations::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // A user registers for an event at most once
        manager
            .create_index(
                Index::create()
                    .name(IDX_EVENT_REGISTRATIONS_EVENT_USER)
                    .table(EventRegistrations::Table)
                    .col(EventRegistrations::EventId)
                    .col(EventRegistrations::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EVENT_REGISTRATIONS_EVENT_USER)
                    .table(EventRegistrations::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EventRegistrations::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum EventRegistrations {
    Table,
    Id,
    EventId,
    UserId,
    CreatedAt,
}

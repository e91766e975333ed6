use sea_orm_migration::{prelude::*, schema::*};

static IDX_MENTORSHIPS_CREATOR_ID: &str = "idx_mentorships_creator_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Mentorships::Table)
                    .if_not_exists()
                    .col(pk_auto(Mentorships::Id))
                    .col(string(Mentorships::CreatorId))
                    .col(string(Mentorships::Title))
                    .col(text(Mentorships::Description))
                    .col(json(Mentorships::Specialties))
                    .col(double(Mentorships::Price))
                    .col(integer(Mentorships::MaxMentees))
                    .col(string_null(Mentorships::Duration))
                    .col(timestamp(Mentorships::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MENTORSHIPS_CREATOR_ID)
                    .table(Mentorships::Table)
                    .col(Mentorships::CreatorId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MENTORSHIPS_CREATOR_ID)
                    .table(Mentorships::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Mentorships::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Mentorships {
    Table,
    Id,
    CreatorId,
    Title,
    Description,
    Specialties,
    Price,
    MaxMentees,
    Duration,
    CreatedAt,
}

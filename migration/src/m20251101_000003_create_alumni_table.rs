use sea_orm_migration::{prelude::*, schema::*};

static IDX_ALUMNI_USER_ID: &str = "idx_alumni_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alumni::Table)
                    .if_not_exists()
                    .col(pk_auto(Alumni::Id))
                    .col(string(Alumni::UserId))
                    .col(string(Alumni::FullName))
                    .col(string(Alumni::OfficialEmail))
                    .col(string(Alumni::StudentId))
                    .col(string(Alumni::Department))
                    .col(string(Alumni::GraduationYear))
                    .col(string_null(Alumni::Company))
                    .col(string_len(Alumni::Status, 20))
                    .col(timestamp_null(Alumni::VerifiedAt))
                    .col(timestamp(Alumni::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ALUMNI_USER_ID)
                    .table(Alumni::Table)
                    .col(Alumni::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ALUMNI_USER_ID)
                    .table(Alumni::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Alumni::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Alumni {
    Table,
    Id,
    UserId,
    FullName,
    OfficialEmail,
    StudentId,
    Department,
    GraduationYear,
    Company,
    Status,
    VerifiedAt,
    CreatedAt,
}

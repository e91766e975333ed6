use sea_orm_migration::{prelude::*, schema::*};

static IDX_STUDENTS_USER_ID: &str = "idx_students_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(pk_auto(Students::Id))
                    .col(string(Students::UserId))
                    .col(string(Students::FullName))
                    .col(string(Students::OfficialEmail))
                    .col(string(Students::StudentId))
                    .col(string(Students::Department))
                    .col(string(Students::BatchYear))
                    .col(string_len(Students::Status, 20))
                    .col(timestamp_null(Students::VerifiedAt))
                    .col(timestamp(Students::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_STUDENTS_USER_ID)
                    .table(Students::Table)
                    .col(Students::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_STUDENTS_USER_ID)
                    .table(Students::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Students {
    Table,
    Id,
    UserId,
    FullName,
    OfficialEmail,
    StudentId,
    Department,
    BatchYear,
    Status,
    VerifiedAt,
    CreatedAt,
}

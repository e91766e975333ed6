use sea_orm::entity::prelude::*;

use crate::{json::StringList, sea_orm_active_enums::JobStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "jobs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub alumni_user_id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Json")]
    pub requirements: StringList,
    #[sea_orm(column_type = "Json")]
    pub skills: StringList,
    pub salary: Option<String>,
    pub deadline: Option<Date>,
    pub status: JobStatus,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

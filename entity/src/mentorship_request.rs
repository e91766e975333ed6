use sea_orm::entity::prelude::*;

use crate::{json::StringList, sea_orm_active_enums::RequestStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mentorship_requests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub mentorship_id: i32,
    #[sea_orm(indexed)]
    pub mentor_id: String,
    #[sea_orm(indexed)]
    pub sender_id: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub goals: Option<String>,
    #[sea_orm(column_type = "Json")]
    pub skills: StringList,
    pub status: RequestStatus,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

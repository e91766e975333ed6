use sea_orm::entity::prelude::*;

use crate::{json::StringList, sea_orm_active_enums::RequestStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "collaboration_requests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Project the request targets. Not enforced as a foreign key.
    pub project_id: i32,
    #[sea_orm(indexed)]
    pub sender_user_id: String,
    #[sea_orm(indexed)]
    pub receiver_user_id: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub requested_role: String,
    pub availability: String,
    pub portfolio_link: Option<String>,
    #[sea_orm(column_type = "Json")]
    pub skills: StringList,
    pub status: RequestStatus,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::RequestStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "recommendation_requests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub alumni_id: String,
    #[sea_orm(indexed)]
    pub student_id: String,
    pub request_type: String,
    #[sea_orm(column_type = "Text")]
    pub purpose: String,
    pub deadline: Option<Date>,
    #[sea_orm(column_type = "Text", nullable)]
    pub message: Option<String>,
    pub status: RequestStatus,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

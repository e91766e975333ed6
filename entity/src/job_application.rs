use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::RequestStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "job_applications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub job_id: i32,
    #[sea_orm(indexed)]
    pub applicant_user_id: String,
    #[sea_orm(column_type = "Text")]
    pub cover_letter: String,
    pub resume_link: Option<String>,
    pub status: RequestStatus,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

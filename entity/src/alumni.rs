use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::VerificationStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "alumni")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub user_id: String,
    pub full_name: String,
    pub official_email: String,
    pub student_id: String,
    pub department: String,
    pub graduation_year: String,
    pub company: Option<String>,
    pub status: VerificationStatus,
    pub verified_at: Option<DateTime>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

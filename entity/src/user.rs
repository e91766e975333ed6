use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::UserType;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// External identity of the user, issued by the identity provider.
    #[sea_orm(unique)]
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub user_type: UserType,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

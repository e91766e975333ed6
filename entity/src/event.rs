use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub creator_id: String,
    /// Optional co-host or speaker
    pub responder_id: Option<String>,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub is_virtual: bool,
    pub location: Option<String>,
    pub meeting_link: Option<String>,
    pub event_date: Date,
    pub start_time: Time,
    pub end_time: Time,
    /// Maximum number of registrations, unlimited when `None`
    pub capacity: Option<i32>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

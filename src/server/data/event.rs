//! Events.

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::event::CreateEventDto;

/// Repository for the `events` table
pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    /// Creates a new instance of [`EventRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert a new event
    pub async fn create(&self, event: CreateEventDto) -> Result<entity::event::Model, DbErr> {
        entity::prelude::Event::insert(entity::event::ActiveModel {
            creator_id: ActiveValue::Set(event.creator_id),
            responder_id: ActiveValue::Set(event.responder_id),
            title: ActiveValue::Set(event.title),
            description: ActiveValue::Set(event.description),
            is_virtual: ActiveValue::Set(event.is_virtual),
            location: ActiveValue::Set(event.location),
            meeting_link: ActiveValue::Set(event.meeting_link),
            event_date: ActiveValue::Set(event.event_date),
            start_time: ActiveValue::Set(event.start_time),
            end_time: ActiveValue::Set(event.end_time),
            capacity: ActiveValue::Set(event.capacity),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    /// Find an event by ID
    pub async fn get(&self, id: i32) -> Result<Option<entity::event::Model>, DbErr> {
        entity::prelude::Event::find_by_id(id).one(self.db).await
    }

    /// List events in chronological order of their date and start time
    pub async fn list(&self, creator_id: Option<&str>) -> Result<Vec<entity::event::Model>, DbErr> {
        let mut query = entity::prelude::Event::find();

        if let Some(creator_id) = creator_id {
            query = query.filter(entity::event::Column::CreatorId.eq(creator_id));
        }

        query
            .order_by_asc(entity::event::Column::EventDate)
            .order_by_asc(entity::event::Column::StartTime)
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await
    }
}

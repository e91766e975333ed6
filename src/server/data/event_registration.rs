//! Event registrations.

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

/// Repository for the `event_registrations` table
pub struct EventRegistrationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRegistrationRepository<'a, C> {
    /// Creates a new instance of [`EventRegistrationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Register a user for an event
    pub async fn create(
        &self,
        event_id: i32,
        user_id: String,
    ) -> Result<entity::event_registration::Model, DbErr> {
        entity::prelude::EventRegistration::insert(entity::event_registration::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    /// Find the registration of a user for an event
    pub async fn find(
        &self,
        event_id: i32,
        user_id: &str,
    ) -> Result<Option<entity::event_registration::Model>, DbErr> {
        entity::prelude::EventRegistration::find()
            .filter(entity::event_registration::Column::EventId.eq(event_id))
            .filter(entity::event_registration::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Number of registrations for an event
    pub async fn count_by_event(&self, event_id: i32) -> Result<u64, DbErr> {
        entity::prelude::EventRegistration::find()
            .filter(entity::event_registration::Column::EventId.eq(event_id))
            .count(self.db)
            .await
    }

    /// Registrations for an event in the order they were made
    pub async fn list_by_event(
        &self,
        event_id: i32,
    ) -> Result<Vec<entity::event_registration::Model>, DbErr> {
        entity::prelude::EventRegistration::find()
            .filter(entity::event_registration::Column::EventId.eq(event_id))
            .order_by_asc(entity::event_registration::Column::CreatedAt)
            .order_by_asc(entity::event_registration::Column::Id)
            .all(self.db)
            .await
    }
}

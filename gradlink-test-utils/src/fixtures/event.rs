use chrono::{NaiveDate, NaiveTime, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn event(&self) -> EventFixtures<'_> {
        EventFixtures { context: self }
    }
}

pub struct EventFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> EventFixtures<'a> {
    pub async fn insert_event(
        &self,
        creator_id: &str,
        capacity: Option<i32>,
    ) -> Result<entity::event::Model, TestError> {
        Ok(entity::prelude::Event::insert(entity::event::ActiveModel {
            creator_id: ActiveValue::Set(creator_id.to_string()),
            responder_id: ActiveValue::Set(None),
            title: ActiveValue::Set("Alumni Meetup".to_string()),
            description: ActiveValue::Set("Annual alumni networking evening".to_string()),
            is_virtual: ActiveValue::Set(false),
            location: ActiveValue::Set(Some("Main Campus".to_string())),
            meeting_link: ActiveValue::Set(None),
            event_date: ActiveValue::Set(NaiveDate::from_ymd_opt(2030, 1, 15).unwrap_or_default()),
            start_time: ActiveValue::Set(NaiveTime::from_hms_opt(18, 0, 0).unwrap_or_default()),
            end_time: ActiveValue::Set(NaiveTime::from_hms_opt(21, 0, 0).unwrap_or_default()),
            capacity: ActiveValue::Set(capacity),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.context.db)
        .await?)
    }

    pub async fn insert_registration(
        &self,
        event_id: i32,
        user_id: &str,
    ) -> Result<entity::event_registration::Model, TestError> {
        Ok(entity::prelude::EventRegistration::insert(
            entity::event_registration::ActiveModel {
                event_id: ActiveValue::Set(event_id),
                user_id: ActiveValue::Set(user_id.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.context.db)
        .await?)
    }
}

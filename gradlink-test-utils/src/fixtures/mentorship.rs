use chrono::Utc;
use entity::sea_orm_active_enums::RequestStatus;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::mock_skills, TestContext};

impl TestContext {
    pub fn mentorship(&self) -> MentorshipFixtures<'_> {
        MentorshipFixtures { context: self }
    }
}

pub struct MentorshipFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> MentorshipFixtures<'a> {
    pub async fn insert_mentorship(
        &self,
        creator_id: &str,
    ) -> Result<entity::mentorship::Model, TestError> {
        Ok(
            entity::prelude::Mentorship::insert(entity::mentorship::ActiveModel {
                creator_id: ActiveValue::Set(creator_id.to_string()),
                title: ActiveValue::Set("Breaking into backend engineering".to_string()),
                description: ActiveValue::Set("Weekly sessions on systems design".to_string()),
                specialties: ActiveValue::Set(vec!["Databases".to_string()].into()),
                price: ActiveValue::Set(0.0),
                max_mentees: ActiveValue::Set(3),
                duration: ActiveValue::Set(Some("3 months".to_string())),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    pub async fn insert_mentorship_request(
        &self,
        mentorship_id: i32,
        mentor_id: &str,
        sender_id: &str,
    ) -> Result<entity::mentorship_request::Model, TestError> {
        Ok(entity::prelude::MentorshipRequest::insert(
            entity::mentorship_request::ActiveModel {
                mentorship_id: ActiveValue::Set(mentorship_id),
                mentor_id: ActiveValue::Set(mentor_id.to_string()),
                sender_id: ActiveValue::Set(sender_id.to_string()),
                message: ActiveValue::Set("I would like to learn from you".to_string()),
                goals: ActiveValue::Set(None),
                skills: ActiveValue::Set(mock_skills().into()),
                status: ActiveValue::Set(RequestStatus::Pending),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.context.db)
        .await?)
    }
}

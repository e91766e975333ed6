use chrono::Utc;
use entity::sea_orm_active_enums::RequestStatus;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn recommendation(&self) -> RecommendationFixtures<'_> {
        RecommendationFixtures { context: self }
    }
}

pub struct RecommendationFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> RecommendationFixtures<'a> {
    pub async fn insert_recommendation_request(
        &self,
        alumni_id: &str,
        student_id: &str,
    ) -> Result<entity::recommendation_request::Model, TestError> {
        Ok(entity::prelude::RecommendationRequest::insert(
            entity::recommendation_request::ActiveModel {
                alumni_id: ActiveValue::Set(alumni_id.to_string()),
                student_id: ActiveValue::Set(student_id.to_string()),
                request_type: ActiveValue::Set("graduate_school".to_string()),
                purpose: ActiveValue::Set("MSc application".to_string()),
                deadline: ActiveValue::Set(None),
                message: ActiveValue::Set(None),
                status: ActiveValue::Set(RequestStatus::Pending),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.context.db)
        .await?)
    }
}

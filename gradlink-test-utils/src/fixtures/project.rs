use chrono::Utc;
use entity::sea_orm_active_enums::{ProjectStatus, RequestStatus};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::mock_skills, TestContext};

impl TestContext {
    pub fn project(&self) -> ProjectFixtures<'_> {
        ProjectFixtures { context: self }
    }
}

pub struct ProjectFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> ProjectFixtures<'a> {
    pub async fn insert_project(
        &self,
        owner_user_id: &str,
    ) -> Result<entity::project::Model, TestError> {
        Ok(
            entity::prelude::Project::insert(entity::project::ActiveModel {
                user_id: ActiveValue::Set(owner_user_id.to_string()),
                title: ActiveValue::Set("Campus Marketplace".to_string()),
                description: ActiveValue::Set("Buy and sell used textbooks".to_string()),
                tech_stacks: ActiveValue::Set(
                    vec!["Rust".to_string(), "React".to_string()].into(),
                ),
                status: ActiveValue::Set(ProjectStatus::Open),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    pub async fn insert_collaboration_request(
        &self,
        project_id: i32,
        sender_user_id: &str,
        receiver_user_id: &str,
    ) -> Result<entity::collaboration_request::Model, TestError> {
        Ok(entity::prelude::CollaborationRequest::insert(
            entity::collaboration_request::ActiveModel {
                project_id: ActiveValue::Set(project_id),
                sender_user_id: ActiveValue::Set(sender_user_id.to_string()),
                receiver_user_id: ActiveValue::Set(receiver_user_id.to_string()),
                message: ActiveValue::Set("I would like to help".to_string()),
                requested_role: ActiveValue::Set("Frontend".to_string()),
                availability: ActiveValue::Set("10 hours/week".to_string()),
                portfolio_link: ActiveValue::Set(None),
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

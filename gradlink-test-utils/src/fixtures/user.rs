use chrono::Utc;
use entity::sea_orm_active_enums::UserType;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { context: self }
    }
}

pub struct UserFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    pub async fn insert_user(
        &self,
        user_id: &str,
        user_type: UserType,
    ) -> Result<entity::user::Model, TestError> {
        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            name: ActiveValue::Set(format!("User {}", user_id)),
            email: ActiveValue::Set(format!("{}@example.com", user_id)),
            user_type: ActiveValue::Set(user_type),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.context.db)
        .await?)
    }
}

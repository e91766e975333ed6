//! Registered users.

use chrono::Utc;
use entity::sea_orm_active_enums::UserType;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::model::user::CreateUserDto;

/// Repository for the `users` table
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user
    pub async fn create(
        &self,
        user: CreateUserDto,
        user_type: UserType,
    ) -> Result<entity::user::Model, DbErr> {
        entity::prelude::User::insert(entity::user::ActiveModel {
            user_id: ActiveValue::Set(user.user_id),
            name: ActiveValue::Set(user.name),
            email: ActiveValue::Set(user.email),
            user_type: ActiveValue::Set(user_type),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    /// Find a user by their external identity ID
    pub async fn get_by_user_id(
        &self,
        user_id: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }
}

//! User registration.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::user::CreateUserDto,
    server::{
        data::user::UserRepository,
        error::{
            resource::{conflict_on_unique, ResourceError},
            Error,
        },
        model::db::UserModel,
        util::validation::{parse_user_type, require_non_empty},
    },
};

static USER_EXISTS_MESSAGE: &str = "User already exists";

/// Registration and lookup of GradLink users.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Register a user from the identity provider
    ///
    /// # Returns
    /// - `Ok(UserModel)`: The newly created user
    /// - `Err(Error::ValidationError)`: A field is blank or the user type is unknown
    /// - `Err(Error::ResourceError)`: A user with the same `userId` already exists
    /// - `Err(Error::DbErr)`: Database error
    pub async fn create_user(&self, user: CreateUserDto) -> Result<UserModel, Error> {
        require_non_empty("userId", &user.user_id)?;
        require_non_empty("name", &user.name)?;
        require_non_empty("email", &user.email)?;
        let user_type = parse_user_type(&user.user_type)?;

        let user_repository = UserRepository::new(self.db);

        if user_repository.get_by_user_id(&user.user_id).await?.is_some() {
            return Err(ResourceError::Conflict(USER_EXISTS_MESSAGE.to_string()).into());
        }

        let user = user_repository
            .create(user, user_type)
            .await
            .map_err(|err| conflict_on_unique(err, USER_EXISTS_MESSAGE))?;

        tracing::info!("Registered {:?} user {}", user.user_type, user.user_id);

        Ok(user)
    }

    /// Get a registered user by external identity
    pub async fn get_user(&self, user_id: &str) -> Result<UserModel, Error> {
        let user_repository = UserRepository::new(self.db);

        let user = user_repository
            .get_by_user_id(user_id)
            .await?
            .ok_or_else(|| ResourceError::not_found("User", user_id))?;

        Ok(user)
    }
}

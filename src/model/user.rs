use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::UserType;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    pub user_id: String,
    pub name: String,
    pub email: String,
    /// One of `student`, `alumni` or `admin`
    pub user_type: String,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub user_id: String,
    pub name: String,
    pub email: String,
    #[schema(value_type = String)]
    pub user_type: UserType,
    pub created_at: NaiveDateTime,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UserResponseDto {
    pub user: UserDto,
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            user_id: user.user_id,
            name: user.name,
            email: user.email,
            user_type: user.user_type,
            created_at: user.created_at,
        }
    }
}

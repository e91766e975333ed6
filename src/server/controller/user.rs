//! User registration and lookup endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{CreatedDto, ErrorDto},
        user::{CreateUserDto, UserDto, UserResponseDto},
    },
    server::{error::Error, model::app::AppState, service::user::UserService},
};

/// OpenAPI tag for user endpoints
pub static USER_TAG: &str = "user";

/// Register a user after signup with the identity provider
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = CreatedDto),
        (status = 400, description = "Missing field or invalid user type", body = ErrorDto),
        (status = 409, description = "User already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload?;

    let user = UserService::new(&state.db).create_user(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedDto {
            message: "User created successfully".to_string(),
            id: user.id,
        }),
    ))
}

/// Get a user by their identity provider ID
#[utoipa::path(
    get,
    path = "/users/{userId}",
    tag = USER_TAG,
    params(
        ("userId" = String, Path, description = "Identity provider user ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponseDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db).get_user(&user_id).await?;

    Ok((
        StatusCode::OK,
        Json(UserResponseDto {
            user: UserDto::from(user),
        }),
    ))
}

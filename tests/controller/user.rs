use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::UserType;
use gradlink::{
    model::user::CreateUserDto,
    server::controller::user::{create_user, get_user},
};
use gradlink_test_utils::prelude::*;

fn create_user_dto(user_type: &str) -> CreateUserDto {
    CreateUserDto {
        user_id: "firebase-1".to_string(),
        name: "Tanvir Hasan".to_string(),
        email: "tanvir@example.com".to_string(),
        user_type: user_type.to_string(),
    }
}

/// Expect 201 Created for a new user
#[tokio::test]
async fn create_user_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let result = create_user(State(test.to_app_state()), Ok(Json(create_user_dto("student"))))
        .await
        .into_response();

    assert_eq!(result.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 409 Conflict when the user already exists
#[tokio::test]
async fn create_user_returns_conflict_for_duplicate() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("firebase-1", UserType::Student)
        .build()
        .await?;

    let result = create_user(State(test.to_app_state()), Ok(Json(create_user_dto("student"))))
        .await
        .into_response();

    assert_eq!(result.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 400 Bad Request for an unknown user type
#[tokio::test]
async fn create_user_returns_bad_request_for_invalid_type() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let result = create_user(State(test.to_app_state()), Ok(Json(create_user_dto("guest"))))
        .await
        .into_response();

    assert_eq!(result.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 Not Found for an unknown user
#[tokio::test]
async fn get_user_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let result = get_user(State(test.to_app_state()), Path("firebase-1".to_string()))
        .await
        .into_response();

    assert_eq!(result.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 500 Internal Server Error when the database is unavailable
#[tokio::test]
async fn get_user_returns_internal_error_without_tables() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_user(State(test.to_app_state()), Path("firebase-1".to_string()))
        .await
        .into_response();

    assert_eq!(result.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}

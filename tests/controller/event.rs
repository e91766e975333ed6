use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use gradlink::{
    model::event::CreateEventRegistrationDto,
    server::controller::event::{list_event_registrations, register_for_event},
};
use gradlink_test_utils::prelude::*;

fn registration(user_id: &str) -> CreateEventRegistrationDto {
    CreateEventRegistrationDto {
        user_id: user_id.to_string(),
    }
}

/// Expect 201 Created for a first registration
#[tokio::test]
async fn register_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let event = test.event().insert_event("alumni-1", Some(10)).await?;

    let result = register_for_event(
        State(test.to_app_state()),
        Path(event.id),
        Ok(Json(registration("student-1"))),
    )
    .await
    .into_response();

    assert_eq!(result.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 409 Conflict for a repeated registration
#[tokio::test]
async fn register_returns_conflict_for_duplicate() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let event = test.event().insert_event("alumni-1", None).await?;
    test.event().insert_registration(event.id, "student-1").await?;

    let result = register_for_event(
        State(test.to_app_state()),
        Path(event.id),
        Ok(Json(registration("student-1"))),
    )
    .await
    .into_response();

    assert_eq!(result.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 400 Bad Request when the event is full
#[tokio::test]
async fn register_returns_bad_request_when_full() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let event = test.event().insert_event("alumni-1", Some(1)).await?;
    test.event().insert_registration(event.id, "student-1").await?;

    let result = register_for_event(
        State(test.to_app_state()),
        Path(event.id),
        Ok(Json(registration("student-2"))),
    )
    .await
    .into_response();

    assert_eq!(result.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 Not Found listing registrations of a nonexistent event
#[tokio::test]
async fn list_registrations_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let result = list_event_registrations(State(test.to_app_state()), Path(42))
        .await
        .into_response();

    assert_eq!(result.status(), StatusCode::NOT_FOUND);

    Ok(())
}

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::VerificationStatus;
use gradlink::{
    model::{api::StatusUpdateDto, verification::VerificationListQuery},
    server::controller::verification::{
        get_verification_status, list_verifications, set_verification_status,
    },
};
use gradlink_test_utils::prelude::*;

/// Expect 200 OK for a user with an identity record
#[tokio::test]
async fn status_returns_ok() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.verification()
        .insert_student("u1", "20101234", VerificationStatus::Pending)
        .await?;

    let result = get_verification_status(State(test.to_app_state()), Path("u1".to_string()))
        .await
        .into_response();

    assert_eq!(result.status(), StatusCode::OK);

    Ok(())
}

/// Expect 400 Bad Request when the user type filter is missing
#[tokio::test]
async fn list_requires_user_type() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let query = VerificationListQuery {
        user_type: None,
        status: None,
    };
    let result = list_verifications(State(test.to_app_state()), Query(query))
        .await
        .into_response();

    assert_eq!(result.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 200 OK when an admin rejects a pending record
#[tokio::test]
async fn set_status_returns_ok() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.verification()
        .insert_alumni("u2", "16101234", VerificationStatus::Pending)
        .await?;

    let result = set_verification_status(
        State(test.to_app_state()),
        Path(("alumni".to_string(), "u2".to_string())),
        Ok(Json(StatusUpdateDto {
            status: "rejected".to_string(),
        })),
    )
    .await
    .into_response();

    assert_eq!(result.status(), StatusCode::OK);

    Ok(())
}

/// Expect 400 Bad Request for the admin user type
#[tokio::test]
async fn set_status_rejects_admin_type() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let result = set_verification_status(
        State(test.to_app_state()),
        Path(("admin".to_string(), "u2".to_string())),
        Ok(Json(StatusUpdateDto {
            status: "verified".to_string(),
        })),
    )
    .await
    .into_response();

    assert_eq!(result.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

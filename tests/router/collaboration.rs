use axum::http::{Method, StatusCode};
use gradlink_test_utils::prelude::*;
use serde_json::json;

use crate::util::{body_json, send, TestContextExt};

/// Expect a new request to be pending with a creation timestamp
#[tokio::test]
async fn created_request_is_pending() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let project = test.project().insert_project("alumni-1").await?;

    let created = send(
        test.app(),
        Method::POST,
        "/collaboration-requests",
        Some(json!({
            "projectId": project.id,
            "senderUserId": "student-1",
            "message": "I would like to help",
            "requestedRole": "Frontend",
            "availability": "10 hours/week",
            "skills": ["React"]
        })),
    )
    .await;

    assert_eq!(created.status(), StatusCode::CREATED);

    let listed = send(
        test.app(),
        Method::GET,
        "/collaboration-requests?userId=alumni-1",
        None,
    )
    .await;

    assert_eq!(listed.status(), StatusCode::OK);
    let body = body_json(listed).await;
    let request = &body["collaborations"][0];
    assert_eq!(request["status"], "pending");
    assert_eq!(request["projectTitle"], "Campus Marketplace");
    assert!(request["createdAt"].is_string());

    Ok(())
}

/// Expect 400 Bad Request and an unchanged row for an unknown status
#[tokio::test]
async fn invalid_status_leaves_row_unchanged() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let project = test.project().insert_project("alumni-1").await?;
    let request = test
        .project()
        .insert_collaboration_request(project.id, "student-1", "alumni-1")
        .await?;

    let response = send(
        test.app(),
        Method::PUT,
        &format!("/collaboration-requests/{}/status", request.id),
        Some(json!({ "status": "maybe" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Invalid status" })
    );

    let sent = send(
        test.app(),
        Method::GET,
        "/collaboration-requests/sent?userId=student-1",
        None,
    )
    .await;
    let body = body_json(sent).await;
    assert_eq!(body["collaborations"][0]["status"], "pending");

    Ok(())
}

/// Expect accepting twice to succeed and leave the request accepted
#[tokio::test]
async fn accepting_twice_is_idempotent() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let project = test.project().insert_project("alumni-1").await?;
    let request = test
        .project()
        .insert_collaboration_request(project.id, "student-1", "alumni-1")
        .await?;
    let uri = format!("/collaboration-requests/{}/status", request.id);

    for _ in 0..2 {
        let response = send(
            test.app(),
            Method::PUT,
            &uri,
            Some(json!({ "status": "accepted" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let received = send(
        test.app(),
        Method::GET,
        "/collaboration-requests?userId=alumni-1",
        None,
    )
    .await;
    let body = body_json(received).await;
    assert_eq!(body["collaborations"][0]["status"], "accepted");

    Ok(())
}

/// Expect 400 Bad Request when the user filter is missing
#[tokio::test]
async fn list_without_user_returns_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let response = send(test.app(), Method::GET, "/collaboration-requests", None).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Missing query parameter: userId" })
    );

    Ok(())
}

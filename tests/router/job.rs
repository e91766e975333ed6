use axum::http::{Method, StatusCode};
use entity::sea_orm_active_enums::JobStatus;
use gradlink_test_utils::prelude::*;
use serde_json::json;

use crate::util::{body_json, send, TestContextExt};

/// Expect list fields to be returned as JSON arrays
#[tokio::test]
async fn jobs_carry_array_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let created = send(
        test.app(),
        Method::POST,
        "/jobs",
        Some(json!({
            "alumniUserId": "alumni-1",
            "title": "Junior Backend Engineer",
            "company": "Acme",
            "location": "Dhaka",
            "jobType": "full-time",
            "description": "Build and maintain APIs",
            "requirements": ["BSc in CSE"],
            "skills": ["Rust", "SQL"]
        })),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);

    let listed = send(test.app(), Method::GET, "/jobs", None).await;

    assert_eq!(listed.status(), StatusCode::OK);
    let body = body_json(listed).await;
    let job = &body["jobs"][0];
    assert_eq!(job["skills"], json!(["Rust", "SQL"]));
    assert_eq!(job["requirements"], json!(["BSc in CSE"]));
    assert_eq!(job["status"], "active");

    Ok(())
}

/// Expect 400 Bad Request applying to a closed job
#[tokio::test]
async fn closed_job_rejects_applications() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let job = test.job().insert_job("alumni-1", JobStatus::Active).await?;

    let closed = send(
        test.app(),
        Method::PUT,
        &format!("/jobs/{}", job.id),
        Some(json!({ "status": "closed" })),
    )
    .await;
    assert_eq!(closed.status(), StatusCode::OK);

    let response = send(
        test.app(),
        Method::POST,
        &format!("/jobs/{}/applications", job.id),
        Some(json!({
            "applicantUserId": "student-1",
            "coverLetter": "Please consider my application"
        })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "This job is no longer accepting applications" })
    );

    Ok(())
}

/// Expect the applicant's list to include the job title
#[tokio::test]
async fn applicant_list_includes_job_title() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let job = test.job().insert_job("alumni-1", JobStatus::Active).await?;
    test.job().insert_job_application(job.id, "student-1").await?;

    let response = send(
        test.app(),
        Method::GET,
        "/job-applications?userId=student-1",
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(
        body["applications"][0]["jobTitle"],
        "Junior Backend Engineer"
    );

    Ok(())
}

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use gradlink::{
    model::{
        api::{StatusUpdateDto, UserIdQuery},
        project::CreateProjectDto,
    },
    server::controller::project::{create_project, list_projects, update_project},
};
use gradlink_test_utils::prelude::*;

/// Expect 201 Created for a new project
#[tokio::test]
async fn create_project_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let dto = CreateProjectDto {
        user_id: "alumni-1".to_string(),
        title: "Campus Marketplace".to_string(),
        description: "Buy and sell used textbooks".to_string(),
        tech_stacks: vec![],
        status: None,
    };
    let result = create_project(State(test.to_app_state()), Ok(Json(dto)))
        .await
        .into_response();

    assert_eq!(result.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 200 OK listing projects without an owner filter
#[tokio::test]
async fn list_projects_returns_ok() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.project().insert_project("alumni-1").await?;

    let result = list_projects(State(test.to_app_state()), Query(UserIdQuery { user_id: None }))
        .await
        .into_response();

    assert_eq!(result.status(), StatusCode::OK);

    Ok(())
}

/// Expect 404 Not Found updating a nonexistent project
#[tokio::test]
async fn update_project_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let result = update_project(
        State(test.to_app_state()),
        Path(42),
        Ok(Json(StatusUpdateDto {
            status: "completed".to_string(),
        })),
    )
    .await
    .into_response();

    assert_eq!(result.status(), StatusCode::NOT_FOUND);

    Ok(())
}

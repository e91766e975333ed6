//! Tests for ProjectService.

use entity::sea_orm_active_enums::ProjectStatus;
use gradlink::{
    model::project::CreateProjectDto,
    server::{
        error::{resource::ResourceError, validation::ValidationError, Error},
        service::project::ProjectService,
    },
};
use gradlink_test_utils::prelude::*;

fn create_project_dto(status: Option<&str>) -> CreateProjectDto {
    CreateProjectDto {
        user_id: "alumni-1".to_string(),
        title: "Campus Marketplace".to_string(),
        description: "Buy and sell used textbooks".to_string(),
        tech_stacks: vec!["Rust".to_string()],
        status: status.map(str::to_string),
    }
}

/// Expect new projects to default to open
#[tokio::test]
async fn creates_open_project_by_default() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let project_service = ProjectService::new(&test.db);
    let result = project_service.create_project(create_project_dto(None)).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().status, ProjectStatus::Open);

    Ok(())
}

/// Expect InvalidStatus for an unknown initial status
#[tokio::test]
async fn fails_for_invalid_initial_status() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let project_service = ProjectService::new(&test.db);
    let result = project_service
        .create_project(create_project_dto(Some("archived")))
        .await;

    assert!(matches!(
        result,
        Err(Error::ValidationError(ValidationError::InvalidStatus(_)))
    ));

    Ok(())
}

/// Expect only projects of the requested owner
#[tokio::test]
async fn lists_projects_by_owner() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.project().insert_project("alumni-1").await?;
    test.project().insert_project("alumni-2").await?;

    let project_service = ProjectService::new(&test.db);
    let owned = project_service.list_projects(Some("alumni-1")).await.unwrap();
    let all = project_service.list_projects(None).await.unwrap();

    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].user_id, "alumni-1");
    assert_eq!(all.len(), 2);

    Ok(())
}

/// Expect the project status to change
#[tokio::test]
async fn updates_status() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let project = test.project().insert_project("alumni-1").await?;

    let project_service = ProjectService::new(&test.db);
    let result = project_service.update_status(project.id, "completed").await;

    assert!(matches!(result, Ok(ref p) if p.status == ProjectStatus::Completed));

    Ok(())
}

/// Expect NotFound when updating a nonexistent project
#[tokio::test]
async fn update_fails_for_nonexistent_project() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let project_service = ProjectService::new(&test.db);
    let result = project_service.update_status(42, "completed").await;

    assert!(matches!(
        result,
        Err(Error::ResourceError(ResourceError::NotFound { .. }))
    ));

    Ok(())
}

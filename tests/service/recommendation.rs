//! Tests for RecommendationService.

use entity::sea_orm_active_enums::RequestStatus;
use gradlink::{
    model::recommendation::CreateRecommendationRequestDto,
    server::{
        error::{resource::ResourceError, validation::ValidationError, Error},
        service::recommendation::RecommendationService,
    },
};
use gradlink_test_utils::prelude::*;

fn create_request_dto() -> CreateRecommendationRequestDto {
    CreateRecommendationRequestDto {
        alumni_id: "alumni-1".to_string(),
        student_id: "student-1".to_string(),
        request_type: "graduate_school".to_string(),
        purpose: "MSc application".to_string(),
        deadline: None,
        message: None,
    }
}

/// Expect a pending request
#[tokio::test]
async fn creates_pending_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let recommendation_service = RecommendationService::new(&test.db);
    let result = recommendation_service.create_request(create_request_dto()).await;

    assert!(matches!(result, Ok(ref r) if r.status == RequestStatus::Pending));

    Ok(())
}

/// Expect MissingField when the purpose is blank
#[tokio::test]
async fn fails_for_blank_purpose() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let mut dto = create_request_dto();
    dto.purpose = String::new();

    let recommendation_service = RecommendationService::new(&test.db);
    let result = recommendation_service.create_request(dto).await;

    assert!(matches!(
        result,
        Err(Error::ValidationError(ValidationError::MissingField("purpose")))
    ));

    Ok(())
}

/// Expect requests filtered by alumni or by student
#[tokio::test]
async fn lists_requests_by_either_party() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.recommendation()
        .insert_recommendation_request("alumni-1", "student-1")
        .await?;
    test.recommendation()
        .insert_recommendation_request("alumni-2", "student-1")
        .await?;

    let recommendation_service = RecommendationService::new(&test.db);
    let by_alumni = recommendation_service
        .list_requests(Some("alumni-1"), None)
        .await
        .unwrap();
    let by_student = recommendation_service
        .list_requests(None, Some("student-1"))
        .await
        .unwrap();

    assert_eq!(by_alumni.len(), 1);
    assert_eq!(by_student.len(), 2);

    Ok(())
}

/// Expect MissingFilter when neither filter is given
#[tokio::test]
async fn list_fails_without_filter() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let recommendation_service = RecommendationService::new(&test.db);
    let result = recommendation_service.list_requests(None, Some("")).await;

    assert!(matches!(
        result,
        Err(Error::ValidationError(ValidationError::MissingFilter(_)))
    ));

    Ok(())
}

/// Expect accepting twice to leave the request accepted
#[tokio::test]
async fn repeated_acceptance_is_stable() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let request = test
        .recommendation()
        .insert_recommendation_request("alumni-1", "student-1")
        .await?;

    let recommendation_service = RecommendationService::new(&test.db);
    recommendation_service
        .update_status(request.id, "accepted")
        .await
        .unwrap();
    let result = recommendation_service
        .update_status(request.id, "accepted")
        .await;

    assert!(matches!(result, Ok(ref r) if r.status == RequestStatus::Accepted));

    Ok(())
}

/// Expect NotFound for a nonexistent request
#[tokio::test]
async fn update_fails_for_nonexistent_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let recommendation_service = RecommendationService::new(&test.db);
    let result = recommendation_service.update_status(42, "rejected").await;

    assert!(matches!(
        result,
        Err(Error::ResourceError(ResourceError::NotFound { .. }))
    ));

    Ok(())
}

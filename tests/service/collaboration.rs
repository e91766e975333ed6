//! Tests for CollaborationService.

use entity::sea_orm_active_enums::{RequestStatus, UserType};
use gradlink::{
    model::collaboration::CreateCollaborationRequestDto,
    server::{
        error::{resource::ResourceError, validation::ValidationError, Error},
        service::collaboration::CollaborationService,
    },
};
use gradlink_test_utils::prelude::*;
use sea_orm::EntityTrait;

fn create_request_dto(project_id: i32, receiver: Option<&str>) -> CreateCollaborationRequestDto {
    CreateCollaborationRequestDto {
        project_id,
        sender_user_id: "student-1".to_string(),
        receiver_user_id: receiver.map(str::to_string),
        message: "I would like to help".to_string(),
        requested_role: "Frontend".to_string(),
        availability: "10 hours/week".to_string(),
        portfolio_link: None,
        skills: vec!["React".to_string()],
    }
}

mod create_request {
    use super::*;

    /// Expect a pending request addressed to the project owner when no receiver is given
    #[tokio::test]
    async fn defaults_receiver_to_project_owner() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_user("alumni-1", UserType::Alumni)
            .build()
            .await?;
        let project = test.project().insert_project("alumni-1").await?;

        let collaboration_service = CollaborationService::new(&test.db);
        let result = collaboration_service
            .create_request(create_request_dto(project.id, None))
            .await;

        assert!(result.is_ok());
        let request = result.unwrap();
        assert_eq!(request.receiver_user_id, "alumni-1");
        assert_eq!(request.status, RequestStatus::Pending);
        assert_eq!(Vec::<String>::from(request.skills), vec!["React".to_string()]);

        Ok(())
    }

    /// Expect an explicit receiver to be kept as given
    #[tokio::test]
    async fn keeps_explicit_receiver() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        let project = test.project().insert_project("alumni-1").await?;

        let collaboration_service = CollaborationService::new(&test.db);
        let result = collaboration_service
            .create_request(create_request_dto(project.id, Some("alumni-2")))
            .await;

        assert!(matches!(result, Ok(ref r) if r.receiver_user_id == "alumni-2"));

        Ok(())
    }

    /// Expect NotFound when the receiver must come from a nonexistent project
    #[tokio::test]
    async fn fails_for_nonexistent_project() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;

        let collaboration_service = CollaborationService::new(&test.db);
        let result = collaboration_service
            .create_request(create_request_dto(42, None))
            .await;

        assert!(matches!(
            result,
            Err(Error::ResourceError(ResourceError::NotFound { .. }))
        ));

        Ok(())
    }

    /// Expect MissingField when the requested role is blank
    #[tokio::test]
    async fn fails_for_blank_role() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        let project = test.project().insert_project("alumni-1").await?;

        let mut dto = create_request_dto(project.id, None);
        dto.requested_role = String::new();

        let collaboration_service = CollaborationService::new(&test.db);
        let result = collaboration_service.create_request(dto).await;

        assert!(matches!(
            result,
            Err(Error::ValidationError(ValidationError::MissingField("requestedRole")))
        ));

        Ok(())
    }
}

mod list {
    use super::*;

    /// Expect received and sent lists to carry the project title
    #[tokio::test]
    async fn includes_project_titles() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        let project = test.project().insert_project("alumni-1").await?;
        test.project()
            .insert_collaboration_request(project.id, "student-1", "alumni-1")
            .await?;

        let collaboration_service = CollaborationService::new(&test.db);
        let received = collaboration_service.list_received("alumni-1").await.unwrap();
        let sent = collaboration_service.list_sent("student-1").await.unwrap();

        assert_eq!(received.len(), 1);
        assert_eq!(received[0].project_title.as_deref(), Some("Campus Marketplace"));
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].sender_user_id, "student-1");

        Ok(())
    }

    /// Expect no title for requests whose project was removed
    #[tokio::test]
    async fn omits_title_for_missing_project() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        let project = test.project().insert_project("alumni-1").await?;
        test.project()
            .insert_collaboration_request(project.id, "student-1", "alumni-1")
            .await?;
        entity::prelude::Project::delete_by_id(project.id)
            .exec(&test.db)
            .await?;

        let collaboration_service = CollaborationService::new(&test.db);
        let received = collaboration_service.list_received("alumni-1").await.unwrap();

        assert_eq!(received.len(), 1);
        assert!(received[0].project_title.is_none());

        Ok(())
    }
}

mod update_status {
    use super::*;

    /// Expect the request to be accepted
    #[tokio::test]
    async fn accepts_request() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        let project = test.project().insert_project("alumni-1").await?;
        let request = test
            .project()
            .insert_collaboration_request(project.id, "student-1", "alumni-1")
            .await?;

        let collaboration_service = CollaborationService::new(&test.db);
        let result = collaboration_service
            .update_status(request.id, "accepted")
            .await;

        assert!(matches!(result, Ok(ref r) if r.status == RequestStatus::Accepted));

        Ok(())
    }

    /// Expect InvalidStatus and an unchanged row for an unknown status
    #[tokio::test]
    async fn fails_for_invalid_status() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        let project = test.project().insert_project("alumni-1").await?;
        let request = test
            .project()
            .insert_collaboration_request(project.id, "student-1", "alumni-1")
            .await?;

        let collaboration_service = CollaborationService::new(&test.db);
        let result = collaboration_service
            .update_status(request.id, "maybe")
            .await;

        assert!(matches!(
            result,
            Err(Error::ValidationError(ValidationError::InvalidStatus(_)))
        ));
        let stored = entity::prelude::CollaborationRequest::find_by_id(request.id)
            .one(&test.db)
            .await?;
        assert!(matches!(stored, Some(ref r) if r.status == RequestStatus::Pending));

        Ok(())
    }

    /// Expect NotFound for a nonexistent request
    #[tokio::test]
    async fn fails_for_nonexistent_request() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;

        let collaboration_service = CollaborationService::new(&test.db);
        let result = collaboration_service.update_status(42, "rejected").await;

        assert!(matches!(
            result,
            Err(Error::ResourceError(ResourceError::NotFound { .. }))
        ));

        Ok(())
    }
}

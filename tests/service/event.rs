//! Tests for EventService.

use chrono::{NaiveDate, NaiveTime};
use gradlink::{
    model::event::CreateEventDto,
    server::{
        error::{resource::ResourceError, validation::ValidationError, Error},
        service::event::EventService,
    },
};
use gradlink_test_utils::prelude::*;

fn create_event_dto(capacity: Option<i32>) -> CreateEventDto {
    CreateEventDto {
        creator_id: "alumni-1".to_string(),
        responder_id: None,
        title: "Alumni Meetup".to_string(),
        description: "Annual alumni networking evening".to_string(),
        is_virtual: true,
        location: None,
        meeting_link: Some("https://meet.example.com/alumni".to_string()),
        event_date: NaiveDate::from_ymd_opt(2030, 1, 15).unwrap(),
        start_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
        capacity,
    }
}

mod create_event {
    use super::*;

    /// Expect Ok with the given capacity
    #[tokio::test]
    async fn creates_event() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;

        let event_service = EventService::new(&test.db);
        let result = event_service.create_event(create_event_dto(Some(50))).await;

        assert!(matches!(result, Ok(ref e) if e.capacity == Some(50)));

        Ok(())
    }

    /// Expect InvalidValue for a zero capacity
    #[tokio::test]
    async fn fails_for_zero_capacity() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;

        let event_service = EventService::new(&test.db);
        let result = event_service.create_event(create_event_dto(Some(0))).await;

        assert!(matches!(
            result,
            Err(Error::ValidationError(ValidationError::InvalidValue("capacity")))
        ));

        Ok(())
    }
}

mod register {
    use super::*;

    /// Expect a registration row for an event with room left
    #[tokio::test]
    async fn registers_user() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        let event = test.event().insert_event("alumni-1", Some(2)).await?;

        let event_service = EventService::new(&test.db);
        let result = event_service
            .register(event.id, "student-1".to_string())
            .await;

        assert!(matches!(result, Ok(ref r) if r.event_id == event.id));

        Ok(())
    }

    /// Expect Conflict when the user is already registered
    #[tokio::test]
    async fn fails_for_duplicate_registration() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        let event = test.event().insert_event("alumni-1", None).await?;
        test.event()
            .insert_registration(event.id, "student-1")
            .await?;

        let event_service = EventService::new(&test.db);
        let result = event_service
            .register(event.id, "student-1".to_string())
            .await;

        assert!(matches!(
            result,
            Err(Error::ResourceError(ResourceError::Conflict(_)))
        ));

        Ok(())
    }

    /// Expect EventFull once the capacity is reached
    #[tokio::test]
    async fn fails_when_event_full() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        let event = test.event().insert_event("alumni-1", Some(1)).await?;
        test.event()
            .insert_registration(event.id, "student-1")
            .await?;

        let event_service = EventService::new(&test.db);
        let result = event_service
            .register(event.id, "student-2".to_string())
            .await;

        assert!(matches!(
            result,
            Err(Error::ValidationError(ValidationError::EventFull(_)))
        ));

        Ok(())
    }

    /// Expect NotFound for a nonexistent event
    #[tokio::test]
    async fn fails_for_nonexistent_event() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;

        let event_service = EventService::new(&test.db);
        let result = event_service.register(42, "student-1".to_string()).await;

        assert!(matches!(
            result,
            Err(Error::ResourceError(ResourceError::NotFound { .. }))
        ));

        Ok(())
    }
}

/// Expect registrations of the event only
#[tokio::test]
async fn lists_registrations() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let event = test.event().insert_event("alumni-1", None).await?;
    let other = test.event().insert_event("alumni-1", None).await?;
    test.event().insert_registration(event.id, "student-1").await?;
    test.event().insert_registration(other.id, "student-2").await?;

    let event_service = EventService::new(&test.db);
    let registrations = event_service.list_registrations(event.id).await.unwrap();

    assert_eq!(registrations.len(), 1);
    assert_eq!(registrations[0].user_id, "student-1");

    Ok(())
}

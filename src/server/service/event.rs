//! Events and event registration.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::event::CreateEventDto,
    server::{
        data::{event::EventRepository, event_registration::EventRegistrationRepository},
        error::{
            resource::{conflict_on_unique, ResourceError},
            validation::ValidationError,
            Error,
        },
        model::db::{EventModel, EventRegistrationModel},
        util::validation::require_non_empty,
    },
};

static ALREADY_REGISTERED_MESSAGE: &str = "User is already registered for this event";

/// Events and the registrations made for them.
pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    /// Creates a new instance of [`EventService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create an event
    ///
    /// A capacity, when given, must be at least 1.
    pub async fn create_event(&self, event: CreateEventDto) -> Result<EventModel, Error> {
        require_non_empty("creatorId", &event.creator_id)?;
        require_non_empty("title", &event.title)?;
        require_non_empty("description", &event.description)?;

        if matches!(event.capacity, Some(capacity) if capacity < 1) {
            return Err(ValidationError::InvalidValue("capacity").into());
        }

        let event = EventRepository::new(self.db).create(event).await?;

        tracing::info!("Event {} created by {}", event.id, event.creator_id);

        Ok(event)
    }

    /// List events in schedule order, optionally only those of one creator
    pub async fn list_events(&self, creator_id: Option<&str>) -> Result<Vec<EventModel>, Error> {
        let events = EventRepository::new(self.db).list(creator_id).await?;

        Ok(events)
    }

    /// Register a user for an event
    ///
    /// # Returns
    /// - `Ok(EventRegistrationModel)`: The new registration
    /// - `Err(Error::ValidationError)`: Blank user ID or the event has reached its capacity
    /// - `Err(Error::ResourceError)`: Unknown event or the user is already registered
    /// - `Err(Error::DbErr)`: Database error
    pub async fn register(
        &self,
        event_id: i32,
        user_id: String,
    ) -> Result<EventRegistrationModel, Error> {
        require_non_empty("userId", &user_id)?;

        let event = EventRepository::new(self.db)
            .get(event_id)
            .await?
            .ok_or_else(|| ResourceError::not_found("Event", event_id))?;

        let registration_repository = EventRegistrationRepository::new(self.db);

        if registration_repository
            .find(event.id, &user_id)
            .await?
            .is_some()
        {
            return Err(ResourceError::Conflict(ALREADY_REGISTERED_MESSAGE.to_string()).into());
        }

        if let Some(capacity) = event.capacity {
            let registered = registration_repository.count_by_event(event.id).await?;

            if registered >= capacity.max(0) as u64 {
                return Err(ValidationError::EventFull(event.id).into());
            }
        }

        let registration = registration_repository
            .create(event.id, user_id)
            .await
            .map_err(|err| conflict_on_unique(err, ALREADY_REGISTERED_MESSAGE))?;

        tracing::info!(
            "{} registered for event {}",
            registration.user_id,
            registration.event_id
        );

        Ok(registration)
    }

    /// Registrations of an event in sign-up order
    pub async fn list_registrations(
        &self,
        event_id: i32,
    ) -> Result<Vec<EventRegistrationModel>, Error> {
        let event = EventRepository::new(self.db)
            .get(event_id)
            .await?
            .ok_or_else(|| ResourceError::not_found("Event", event_id))?;

        let registrations = EventRegistrationRepository::new(self.db)
            .list_by_event(event.id)
            .await?;

        Ok(registrations)
    }
}

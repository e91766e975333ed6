//! Mentorship offerings and mentorship requests.

use std::collections::HashMap;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::mentorship::{CreateMentorshipDto, CreateMentorshipRequestDto, MentorshipRequestDto},
    server::{
        data::{mentorship::MentorshipRepository, mentorship_request::MentorshipRequestRepository},
        error::{resource::ResourceError, validation::ValidationError, Error},
        model::db::{MentorshipModel, MentorshipRequestModel},
        service::request::RequestService,
        util::validation::require_non_empty,
    },
};

/// Mentorship offerings and the requests sent to them
pub struct MentorshipService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MentorshipService<'a> {
    /// Creates a new instance of [`MentorshipService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a mentorship offering
    ///
    /// The price must be a non-negative number and at least one mentee must be accepted.
    pub async fn create_mentorship(
        &self,
        mentorship: CreateMentorshipDto,
    ) -> Result<MentorshipModel, Error> {
        require_non_empty("creatorId", &mentorship.creator_id)?;
        require_non_empty("title", &mentorship.title)?;
        require_non_empty("description", &mentorship.description)?;

        if !mentorship.price.is_finite() || mentorship.price < 0.0 {
            return Err(ValidationError::InvalidValue("price").into());
        }
        if mentorship.max_mentees < 1 {
            return Err(ValidationError::InvalidValue("maxMentees").into());
        }

        let mentorship = MentorshipRepository::new(self.db)
            .create(mentorship)
            .await?;

        tracing::info!(
            "Mentorship {} offered by {}",
            mentorship.id,
            mentorship.creator_id
        );

        Ok(mentorship)
    }

    /// List offerings, optionally only those of one creator
    pub async fn list_mentorships(
        &self,
        creator_id: Option<&str>,
    ) -> Result<Vec<MentorshipModel>, Error> {
        let mentorships = MentorshipRepository::new(self.db).list(creator_id).await?;

        Ok(mentorships)
    }

    /// Request mentorship, addressed to the offering creator unless a mentor is provided
    pub async fn create_request(
        &self,
        request: CreateMentorshipRequestDto,
    ) -> Result<MentorshipRequestModel, Error> {
        require_non_empty("senderId", &request.sender_id)?;
        require_non_empty("message", &request.message)?;

        let mentor_id = match request.mentor_id.as_deref() {
            Some(mentor) if !mentor.is_empty() => mentor.to_string(),
            _ => {
                let mentorship = MentorshipRepository::new(self.db)
                    .get(request.mentorship_id)
                    .await?
                    .ok_or_else(|| {
                        ResourceError::not_found("Mentorship", request.mentorship_id)
                    })?;

                mentorship.creator_id
            }
        };

        let request = MentorshipRequestRepository::new(self.db)
            .create(request, mentor_id)
            .await?;

        tracing::info!(
            "Mentorship request {} sent from {} to {}",
            request.id,
            request.sender_id,
            request.mentor_id
        );

        Ok(request)
    }

    /// Requests received by a mentor or sent by a mentee, with the offering title
    ///
    /// The mentor filter takes precedence when both are provided.
    pub async fn list_requests(
        &self,
        mentor_id: Option<&str>,
        sender_id: Option<&str>,
    ) -> Result<Vec<MentorshipRequestDto>, Error> {
        let request_repository = MentorshipRequestRepository::new(self.db);

        let requests = match (mentor_id, sender_id) {
            (Some(mentor_id), _) if !mentor_id.is_empty() => {
                request_repository.list_by_mentor(mentor_id).await?
            }
            (_, Some(sender_id)) if !sender_id.is_empty() => {
                request_repository.list_by_sender(sender_id).await?
            }
            _ => return Err(ValidationError::MissingFilter("mentorId or senderId").into()),
        };

        let mentorship_ids: Vec<i32> = requests.iter().map(|r| r.mentorship_id).collect();
        let titles: HashMap<i32, String> = MentorshipRepository::new(self.db)
            .get_titles_by_ids(&mentorship_ids)
            .await?
            .into_iter()
            .collect();

        Ok(requests
            .into_iter()
            .map(|request| {
                let title = titles.get(&request.mentorship_id).cloned();
                MentorshipRequestDto::new(request, title)
            })
            .collect())
    }

    /// Accept, reject or reset a mentorship request
    pub async fn update_request_status(
        &self,
        id: i32,
        status: &str,
    ) -> Result<MentorshipRequestModel, Error> {
        RequestService::new(self.db)
            .update_status::<entity::prelude::MentorshipRequest>(id, status)
            .await
    }
}

//! Project collaboration requests.

use std::collections::HashMap;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::collaboration::{CollaborationRequestDto, CreateCollaborationRequestDto},
    server::{
        data::{collaboration_request::CollaborationRequestRepository, project::ProjectRepository},
        error::{resource::ResourceError, Error},
        model::db::CollaborationRequestModel,
        service::request::RequestService,
        util::validation::require_non_empty,
    },
};

/// Sending, listing and answering collaboration requests
pub struct CollaborationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CollaborationService<'a> {
    /// Creates a new instance of [`CollaborationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Send a collaboration request for a project
    ///
    /// When no receiver is provided the request is addressed to the project owner,
    /// which requires the project to exist.
    ///
    /// # Returns
    /// - `Ok(CollaborationRequestModel)`: The pending request
    /// - `Err(Error::ValidationError)`: A required field is blank
    /// - `Err(Error::ResourceError)`: The receiver had to be resolved and the project does not exist
    /// - `Err(Error::DbErr)`: Database error
    pub async fn create_request(
        &self,
        request: CreateCollaborationRequestDto,
    ) -> Result<CollaborationRequestModel, Error> {
        require_non_empty("senderUserId", &request.sender_user_id)?;
        require_non_empty("message", &request.message)?;
        require_non_empty("requestedRole", &request.requested_role)?;
        require_non_empty("availability", &request.availability)?;

        let receiver_user_id = match request.receiver_user_id.as_deref() {
            Some(receiver) if !receiver.is_empty() => receiver.to_string(),
            _ => {
                let project = ProjectRepository::new(self.db)
                    .get(request.project_id)
                    .await?
                    .ok_or_else(|| ResourceError::not_found("Project", request.project_id))?;

                project.user_id
            }
        };

        let request = CollaborationRequestRepository::new(self.db)
            .create(request, receiver_user_id)
            .await?;

        tracing::info!(
            "Collaboration request {} sent from {} to {}",
            request.id,
            request.sender_user_id,
            request.receiver_user_id
        );

        Ok(request)
    }

    /// Requests received by a user with the title of each targeted project
    pub async fn list_received(&self, user_id: &str) -> Result<Vec<CollaborationRequestDto>, Error> {
        let requests = CollaborationRequestRepository::new(self.db)
            .list_received(user_id)
            .await?;

        self.with_project_titles(requests).await
    }

    /// Requests sent by a user with the title of each targeted project
    pub async fn list_sent(&self, user_id: &str) -> Result<Vec<CollaborationRequestDto>, Error> {
        let requests = CollaborationRequestRepository::new(self.db)
            .list_sent(user_id)
            .await?;

        self.with_project_titles(requests).await
    }

    /// Accept, reject or reset a collaboration request
    pub async fn update_status(
        &self,
        id: i32,
        status: &str,
    ) -> Result<CollaborationRequestModel, Error> {
        RequestService::new(self.db)
            .update_status::<entity::prelude::CollaborationRequest>(id, status)
            .await
    }

    async fn with_project_titles(
        &self,
        requests: Vec<CollaborationRequestModel>,
    ) -> Result<Vec<CollaborationRequestDto>, Error> {
        let project_ids: Vec<i32> = requests.iter().map(|r| r.project_id).collect();
        let titles: HashMap<i32, String> = ProjectRepository::new(self.db)
            .get_titles_by_ids(&project_ids)
            .await?
            .into_iter()
            .collect();

        Ok(requests
            .into_iter()
            .map(|request| {
                let title = titles.get(&request.project_id).cloned();
                CollaborationRequestDto::new(request, title)
            })
            .collect())
    }
}

//! Recommendation letter requests.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::recommendation::CreateRecommendationRequestDto,
    server::{
        data::recommendation_request::RecommendationRequestRepository,
        error::{validation::ValidationError, Error},
        model::db::RecommendationRequestModel,
        service::request::RequestService,
        util::validation::require_non_empty,
    },
};

/// Recommendation requests between students and alumni
pub struct RecommendationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RecommendationService<'a> {
    /// Creates a new instance of [`RecommendationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Request a recommendation letter from an alumni
    pub async fn create_request(
        &self,
        request: CreateRecommendationRequestDto,
    ) -> Result<RecommendationRequestModel, Error> {
        require_non_empty("alumniId", &request.alumni_id)?;
        require_non_empty("studentId", &request.student_id)?;
        require_non_empty("requestType", &request.request_type)?;
        require_non_empty("purpose", &request.purpose)?;

        let request = RecommendationRequestRepository::new(self.db)
            .create(request)
            .await?;

        tracing::info!(
            "Recommendation request {} sent from {} to {}",
            request.id,
            request.student_id,
            request.alumni_id
        );

        Ok(request)
    }

    /// Requests addressed to an alumni or made by a student
    ///
    /// The alumni filter takes precedence when both are provided.
    pub async fn list_requests(
        &self,
        alumni_id: Option<&str>,
        student_id: Option<&str>,
    ) -> Result<Vec<RecommendationRequestModel>, Error> {
        let request_repository = RecommendationRequestRepository::new(self.db);

        let requests = match (alumni_id, student_id) {
            (Some(alumni_id), _) if !alumni_id.is_empty() => {
                request_repository.list_by_alumni(alumni_id).await?
            }
            (_, Some(student_id)) if !student_id.is_empty() => {
                request_repository.list_by_student(student_id).await?
            }
            _ => return Err(ValidationError::MissingFilter("alumniId or studentId").into()),
        };

        Ok(requests)
    }

    /// Accept, reject or reset a recommendation request
    pub async fn update_status(
        &self,
        id: i32,
        status: &str,
    ) -> Result<RecommendationRequestModel, Error> {
        RequestService::new(self.db)
            .update_status::<entity::prelude::RecommendationRequest>(id, status)
            .await
    }
}

//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Handlers sharing a path are registered together so their methods merge into a single
/// route. The OpenAPI specification is served at `/api/docs/openapi.json`.
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready for `with_state`.
///
/// # Example
/// ```ignore
/// let app_state = AppState { db };
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "GradLink", description = "GradLink alumni and student networking API"), tags(
        (name = controller::health::HEALTH_TAG, description = "Service health"),
        (name = controller::user::USER_TAG, description = "User registration and lookup"),
        (name = controller::verification::VERIFICATION_TAG, description = "Student and alumni identity verification"),
        (name = controller::project::PROJECT_TAG, description = "Projects open for collaboration"),
        (name = controller::collaboration::COLLABORATION_TAG, description = "Project collaboration requests"),
        (name = controller::job::JOB_TAG, description = "Job posts and applications"),
        (name = controller::event::EVENT_TAG, description = "Events and registrations"),
        (name = controller::mentorship::MENTORSHIP_TAG, description = "Mentorship offerings and requests"),
        (name = controller::recommendation::RECOMMENDATION_TAG, description = "Recommendation letter requests"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::health::health))
        .routes(routes!(controller::user::create_user))
        .routes(routes!(controller::user::get_user))
        .routes(routes!(controller::verification::verify_user))
        .routes(routes!(controller::verification::get_verification_status))
        .routes(routes!(controller::verification::list_verifications))
        .routes(routes!(controller::verification::set_verification_status))
        .routes(routes!(
            controller::project::create_project,
            controller::project::list_projects
        ))
        .routes(routes!(controller::project::update_project))
        .routes(routes!(
            controller::collaboration::create_collaboration_request,
            controller::collaboration::list_received_collaboration_requests
        ))
        .routes(routes!(
            controller::collaboration::list_sent_collaboration_requests
        ))
        .routes(routes!(
            controller::collaboration::update_collaboration_request_status
        ))
        .routes(routes!(controller::job::create_job, controller::job::list_jobs))
        .routes(routes!(controller::job::update_job))
        .routes(routes!(
            controller::job::create_job_application,
            controller::job::list_job_applications
        ))
        .routes(routes!(controller::job::list_user_job_applications))
        .routes(routes!(controller::job::update_job_application_status))
        .routes(routes!(
            controller::event::create_event,
            controller::event::list_events
        ))
        .routes(routes!(
            controller::event::register_for_event,
            controller::event::list_event_registrations
        ))
        .routes(routes!(
            controller::mentorship::create_mentorship,
            controller::mentorship::list_mentorships
        ))
        .routes(routes!(
            controller::mentorship::create_mentorship_request,
            controller::mentorship::list_mentorship_requests
        ))
        .routes(routes!(
            controller::mentorship::update_mentorship_request_status
        ))
        .routes(routes!(
            controller::recommendation::create_recommendation_request,
            controller::recommendation::list_recommendation_requests
        ))
        .routes(routes!(
            controller::recommendation::update_recommendation_request_status
        ))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}

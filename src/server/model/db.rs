//! Database model type aliases.
//!
//! Short names for the SeaORM models of the `entity` crate, used throughout the data
//! and service layers.

/// Registered user, keyed by the external identity `user_id`.
pub type UserModel = entity::user::Model;

/// Student identity record.
pub type StudentModel = entity::student::Model;

/// Alumni identity record.
pub type AlumniModel = entity::alumni::Model;

/// Project posted for collaboration.
pub type ProjectModel = entity::project::Model;

/// Request to join a project.
pub type CollaborationRequestModel = entity::collaboration_request::Model;

/// Job post created by an alumni.
pub type JobModel = entity::job::Model;

/// Application submitted to a job post.
pub type JobApplicationModel = entity::job_application::Model;

/// Scheduled in-person or virtual event.
pub type EventModel = entity::event::Model;

/// Registration of a user for an event.
pub type EventRegistrationModel = entity::event_registration::Model;

/// Mentorship offering created by an alumni.
pub type MentorshipModel = entity::mentorship::Model;

/// Request to join a mentorship offering.
pub type MentorshipRequestModel = entity::mentorship_request::Model;

/// Recommendation letter request from a student to an alumni.
pub type RecommendationRequestModel = entity::recommendation_request::Model;

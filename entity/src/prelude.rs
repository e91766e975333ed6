pub use super::alumni::Entity as Alumni;
pub use super::collaboration_request::Entity as CollaborationRequest;
pub use super::event::Entity as Event;
pub use super::event_registration::Entity as EventRegistration;
pub use super::job::Entity as Job;
pub use super::job_application::Entity as JobApplication;
pub use super::mentorship::Entity as Mentorship;
pub use super::mentorship_request::Entity as MentorshipRequest;
pub use super::project::Entity as Project;
pub use super::recommendation_request::Entity as RecommendationRequest;
pub use super::student::Entity as Student;
pub use super::user::Entity as User;

//! Fixture helpers for inserting rows during test execution.
//!
//! Each submodule hangs a fixture accessor off [`TestContext`](crate::TestContext):
//!
//! - `user` - registered users
//! - `verification` - student and alumni identity records
//! - `project` - projects and collaboration requests
//! - `job` - job posts and applications
//! - `event` - events and registrations
//! - `mentorship` - mentorship offerings and requests
//! - `recommendation` - recommendation letter requests

pub mod event;
pub mod job;
pub mod mentorship;
pub mod project;
pub mod recommendation;
pub mod user;
pub mod verification;

/// Skills used by fixtures carrying a skills list.
pub fn mock_skills() -> Vec<String> {
    vec!["React".to_string(), "SQL".to_string()]
}
